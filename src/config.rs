use std::{net::SocketAddr, path::PathBuf};

use crate::services::response::ServiceError;

#[derive(Debug, Clone)]
pub struct Config {
	/// Fallback filter directive when `RUST_LOG` is not set
	pub log_level: String,

	/// Address server is listening to
	pub server_ip_port: SocketAddr,
	pub posts_path: PathBuf,
	pub allow_origins: Vec<String>,
	pub create_if_missing: bool,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = lookup("SERVER_IP_PORT").unwrap_or("0.0.0.0:5000".into());
		let server_ip_port = server_ip_port
			.parse::<SocketAddr>()
			.map_err(|err| ServiceError::ConfigError(format!("SERVER_IP_PORT `{server_ip_port}`: {err}")))?;
		let posts_path = lookup("BLOG_POSTS_PATH").unwrap_or("blog_posts.json".to_string()).into();
		let allow_origins = lookup("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000,http://localhost:3001".to_string())
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(String::from)
			.collect();
		let create_if_missing = match lookup("BLOG_CREATE_IF_MISSING").as_deref().map(str::trim) {
			None | Some("1") | Some("true") | Some("yes") => true,
			Some("0") | Some("false") | Some("no") => false,
			Some(other) => return Err(ServiceError::ConfigError(format!("BLOG_CREATE_IF_MISSING `{other}` is not a boolean"))),
		};

		Ok(Config {
			log_level,
			server_ip_port,
			posts_path,
			allow_origins,
			create_if_missing,
		})
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::Config;
	use crate::services::response::ServiceError;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config = Config::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config.server_ip_port.port(), 5000);
		assert_eq!(config.posts_path.to_str(), Some("blog_posts.json"));
		assert_eq!(config.allow_origins, vec!["http://localhost:3000", "http://localhost:3001"]);
		assert!(config.create_if_missing);
	}

	#[test]
	fn test_overrides() {
		let config = Config::from_lookup(lookup(&[
			("SERVER_IP_PORT", "127.0.0.1:8080"),
			("BLOG_POSTS_PATH", "/tmp/posts.json"),
			("ALLOW_ORIGINS", "https://a.example, https://b.example,"),
			("BLOG_CREATE_IF_MISSING", "false"),
		]))
		.unwrap();
		assert_eq!(config.server_ip_port.to_string(), "127.0.0.1:8080");
		assert_eq!(config.posts_path.to_str(), Some("/tmp/posts.json"));
		assert_eq!(config.allow_origins, vec!["https://a.example", "https://b.example"]);
		assert!(!config.create_if_missing);
	}

	#[test]
	fn test_invalid_values() {
		assert!(matches!(Config::from_lookup(lookup(&[("SERVER_IP_PORT", "nowhere")])), Err(ServiceError::ConfigError(_))));
		assert!(matches!(Config::from_lookup(lookup(&[("BLOG_CREATE_IF_MISSING", "maybe")])), Err(ServiceError::ConfigError(_))));
	}
}
