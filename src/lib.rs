pub mod adapters;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use axum::http::{HeaderValue, Method};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::{
	config::Config,
	database::DocumentExecutor,
	routes::{create_routes, BlogState},
	services::response::ServiceError,
};

pub async fn run(config: &Config) -> Result<(), ServiceError> {
	let executor = DocumentExecutor::new(&config.posts_path);
	if config.create_if_missing {
		executor.create_if_missing().await?;
	}
	tracing::info!("Serving posts from {}", executor.path().display());

	let app = create_routes(BlogState::new(executor))
		.layer(cors_layer(&config.allow_origins)?)
		.layer(TraceLayer::new_for_http());

	tracing::info!("Start Web Server on {}", config.server_ip_port);
	axum::Server::try_bind(&config.server_ip_port)
		.map_err(|err| ServiceError::ServerError(Box::new(err)))?
		.serve(app.into_make_service())
		.await
		.map_err(|err| ServiceError::ServerError(Box::new(err)))
}

fn cors_layer(allow_origins: &[String]) -> Result<CorsLayer, ServiceError> {
	let allow_origin = if allow_origins.iter().any(|origin| origin == "*") {
		AllowOrigin::any()
	} else {
		let origins = allow_origins
			.iter()
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|err| ServiceError::ConfigError(format!("ALLOW_ORIGINS `{origin}`: {err}")))
			})
			.collect::<Result<Vec<_>, _>>()?;
		AllowOrigin::list(origins)
	};
	Ok(CorsLayer::new().allow_origin(allow_origin).allow_methods([Method::GET, Method::POST]))
}
