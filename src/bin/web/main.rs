use blog::dependencies::config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	println!("Environment Variable Is Being Set...");
	dotenv::dotenv().ok();
	let config = match config() {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Invalid configuration: {}", err);
			std::process::exit(1);
		}
	};

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},blog={},tower_http=debug,axum::rejection=trace", config.log_level, config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	if let Err(err) = blog::run(config).await {
		tracing::error!("Web server stopped: {}", err);
		std::process::exit(1);
	}
}
