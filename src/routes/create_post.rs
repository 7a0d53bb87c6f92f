use axum::extract::State;

use crate::services::{
	handlers::PostHandler,
	response::{ServiceError, ServiceResponse},
};

use super::{BlogState, SubmittedForm};

pub async fn add_form(State(state): State<BlogState>) -> ServiceResponse {
	state.view.add().into()
}

pub async fn create_post(
	State(state): State<BlogState>,
	SubmittedForm(form): SubmittedForm,
) -> Result<ServiceResponse, ServiceError> {
	PostHandler::create(form.into(), &state.repository).await?;
	Ok(ServiceResponse::RedirectToIndex)
}
