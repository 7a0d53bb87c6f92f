mod create_post;
mod delete_post;
mod home;
mod like_post;
mod update_post;

use std::{convert::Infallible, sync::Arc};

use async_trait::async_trait;
use axum::{
	body::{Body, Bytes},
	extract::{FromRequest, FromRequestParts, Multipart, Path},
	http::{header, request::Parts, Request, StatusCode},
	routing::get,
	Router,
};

use crate::{
	adapters::repositories::Repository,
	database::DocumentExecutor,
	domain::post::commands::PostForm,
	routes::{
		create_post::{add_form, create_post},
		delete_post::delete_post,
		home::index,
		like_post::like_post,
		update_post::{update_form, update_post},
	},
	services::views::{HtmlView, PostView},
};

#[derive(Clone)]
pub struct BlogState {
	pub repository: Repository<DocumentExecutor>,
	pub view: Arc<dyn PostView>,
}

impl BlogState {
	pub fn new(executor: DocumentExecutor) -> Self {
		Self {
			repository: Repository::new(executor.into()),
			view: Arc::new(HtmlView),
		}
	}

	pub fn with_view(
		mut self,
		view: impl PostView + 'static,
	) -> Self {
		self.view = Arc::new(view);
		self
	}
}

/// Integer post id taken from the path. Anything that is not an integer is a plain 404, as if
/// the route did not match.
pub struct PostId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for PostId {
	type Rejection = StatusCode;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let Path(id) = Path::<i64>::from_request_parts(parts, state).await.map_err(|_| StatusCode::NOT_FOUND)?;
		Ok(Self(id))
	}
}

/// Submitted post fields. Never rejects: urlencoded and multipart bodies are read with or without
/// a content type, the first value of a repeated key wins, and anything unreadable is empty.
pub struct SubmittedForm(pub PostForm);

#[async_trait]
impl<S: Send + Sync> FromRequest<S, Body> for SubmittedForm {
	type Rejection = Infallible;

	async fn from_request(
		req: Request<Body>,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let is_multipart = req
			.headers()
			.get(header::CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
			.unwrap_or(false);

		let pairs = if is_multipart {
			multipart_pairs(req, state).await
		} else {
			match Bytes::from_request(req, state).await {
				Ok(body) => serde_urlencoded::from_bytes::<Vec<(String, String)>>(&body).unwrap_or_else(|err| {
					tracing::debug!("Unreadable form body treated as empty: {}", err);
					Vec::new()
				}),
				Err(err) => {
					tracing::debug!("Form body could not be read: {}", err);
					Vec::new()
				}
			}
		};
		Ok(Self(PostForm::from_pairs(pairs)))
	}
}

async fn multipart_pairs<S: Send + Sync>(
	req: Request<Body>,
	state: &S,
) -> Vec<(String, String)> {
	let mut pairs = Vec::new();
	let Ok(mut multipart) = Multipart::from_request(req, state).await else {
		return pairs;
	};
	while let Ok(Some(field)) = multipart.next_field().await {
		let Some(name) = field.name().map(str::to_owned) else {
			continue;
		};
		if let Ok(value) = field.text().await {
			pairs.push((name, value));
		}
	}
	pairs
}

pub fn create_routes(state: BlogState) -> Router {
	Router::new()
		.route("/", get(index))
		.route("/add", get(add_form).post(create_post))
		.route("/update/:post_id", get(update_form).post(update_post))
		.route("/delete/:post_id", get(delete_post))
		.route("/like/:post_id", get(like_post))
		.with_state(state)
}
