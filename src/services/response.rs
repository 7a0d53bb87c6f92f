use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{Html, IntoResponse, Redirect, Response},
};

pub type AnyError = dyn std::error::Error + Send + Sync;

/// What a route hands back to the transport once the operation succeeded.
#[derive(Debug)]
pub enum ServiceResponse {
	Page(String),
	RedirectToIndex,
}

impl From<String> for ServiceResponse {
	fn from(value: String) -> Self {
		ServiceResponse::Page(value)
	}
}

impl IntoResponse for ServiceResponse {
	fn into_response(self) -> Response {
		match self {
			ServiceResponse::Page(body) => Html(body).into_response(),
			ServiceResponse::RedirectToIndex => Redirect::to("/").into_response(),
		}
	}
}

#[derive(Debug)]
pub enum ServiceError {
	StorageUnavailable(Box<AnyError>),
	EntityNotFound,
	CounterOverflow(&'static str),
	ConfigError(String),
	ServerError(Box<AnyError>),
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::StorageUnavailable(res) => write!(f, "StorageUnavailable: {}", res),
			ServiceError::EntityNotFound => write!(f, "EntityNotFound"),
			ServiceError::CounterOverflow(counter) => write!(f, "CounterOverflow: {}", counter),
			ServiceError::ConfigError(res) => write!(f, "ConfigError: {}", res),
			ServiceError::ServerError(res) => write!(f, "ServerError: {}", res),
		}
	}
}

impl std::error::Error for ServiceError {}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		match self {
			ServiceError::EntityNotFound => (StatusCode::NOT_FOUND, "Post not found").into_response(),
			// already logged with the document path where it happened
			ServiceError::StorageUnavailable(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
			err => {
				tracing::error!("Request failed: {}", err);
				(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
			}
		}
	}
}
