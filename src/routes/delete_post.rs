use axum::extract::State;

use crate::{
	domain::post::commands::DeletePost,
	services::{
		handlers::PostHandler,
		response::{ServiceError, ServiceResponse},
	},
};

use super::{BlogState, PostId};

pub async fn delete_post(
	State(state): State<BlogState>,
	PostId(id): PostId,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::delete(DeletePost { id }, &state.repository).await?;
	Ok(ServiceResponse::RedirectToIndex)
}
