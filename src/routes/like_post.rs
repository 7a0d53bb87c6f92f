use axum::extract::State;

use crate::{
	domain::post::commands::LikePost,
	services::{
		handlers::PostHandler,
		response::{ServiceError, ServiceResponse},
	},
};

use super::{BlogState, PostId};

pub async fn like_post(
	State(state): State<BlogState>,
	PostId(id): PostId,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::like(LikePost { id }, &state.repository).await?;
	Ok(ServiceResponse::RedirectToIndex)
}
