use axum::extract::State;

use crate::{
	domain::post::commands::UpdatePost,
	services::{
		handlers::PostHandler,
		response::{ServiceError, ServiceResponse},
	},
};

use super::{BlogState, PostId, SubmittedForm};

pub async fn update_form(
	State(state): State<BlogState>,
	PostId(id): PostId,
) -> Result<ServiceResponse, ServiceError> {
	let post = PostHandler::get(id, &state.repository).await?;
	Ok(state.view.update(&post).into())
}

pub async fn update_post(
	State(state): State<BlogState>,
	PostId(id): PostId,
	SubmittedForm(form): SubmittedForm,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::update(UpdatePost::new(id, form), &state.repository).await?;
	Ok(ServiceResponse::RedirectToIndex)
}
