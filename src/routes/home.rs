use axum::extract::State;

use crate::services::{
	handlers::PostHandler,
	response::{ServiceError, ServiceResponse},
};

use super::BlogState;

pub async fn index(State(state): State<BlogState>) -> Result<ServiceResponse, ServiceError> {
	let posts = PostHandler::list(&state.repository).await?;
	Ok(state.view.index(&posts).into())
}
