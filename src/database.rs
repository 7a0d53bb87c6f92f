use std::{
	ffi::OsString,
	path::{Path, PathBuf},
	sync::Arc,
};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::sync::RwLock;

use crate::{
	adapters::repositories::PostStore,
	domain::post::PostCollection,
	services::response::{AnyError, ServiceError},
};

/// Post Store backed by a single pretty-printed JSON array on disk.
///
/// Every `load` reads the whole file and every `save` replaces it. Saving goes through a sibling
/// `.tmp` file that is renamed over the document, so readers see either the old or the new
/// snapshot.
#[derive(Debug, Clone)]
pub struct DocumentExecutor {
	path: PathBuf,
}

impl DocumentExecutor {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Writes an empty collection if the document does not exist yet. Returns whether it did.
	pub async fn create_if_missing(&self) -> Result<bool, ServiceError> {
		match tokio::fs::try_exists(&self.path).await {
			Ok(true) => Ok(false),
			Ok(false) => {
				tracing::info!("Creating empty post document at {}", self.path.display());
				self.save(&PostCollection::default()).await?;
				Ok(true)
			}
			Err(err) => Err(unavailable(&self.path, err)),
		}
	}

	fn staging_path(&self) -> PathBuf {
		let mut name = self.path.file_name().map(OsString::from).unwrap_or_else(|| OsString::from("posts"));
		name.push(".tmp");
		self.path.with_file_name(name)
	}
}

#[async_trait]
impl PostStore for DocumentExecutor {
	async fn load(&self) -> Result<PostCollection, ServiceError> {
		let bytes = tokio::fs::read(&self.path).await.map_err(|err| unavailable(&self.path, err))?;
		serde_json::from_slice(&bytes).map_err(|err| unavailable(&self.path, err))
	}

	async fn save(
		&self,
		posts: &PostCollection,
	) -> Result<(), ServiceError> {
		let document = to_document(posts).map_err(|err| unavailable(&self.path, err))?;
		let staging = self.staging_path();

		tokio::fs::write(&staging, &document).await.map_err(|err| unavailable(&staging, err))?;
		if let Err(err) = tokio::fs::rename(&staging, &self.path).await {
			let _ = tokio::fs::remove_file(&staging).await;
			return Err(unavailable(&self.path, err));
		}
		Ok(())
	}
}

impl From<DocumentExecutor> for Arc<RwLock<DocumentExecutor>> {
	fn from(value: DocumentExecutor) -> Self {
		Arc::new(RwLock::new(value))
	}
}

/// Four-space indentation and a trailing newline.
fn to_document(posts: &PostCollection) -> Result<Vec<u8>, serde_json::Error> {
	let mut buffer = Vec::new();
	let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
	posts.serialize(&mut serializer)?;
	buffer.push(b'\n');
	Ok(buffer)
}

fn unavailable(
	path: &Path,
	err: impl Into<Box<AnyError>>,
) -> ServiceError {
	let err = err.into();
	tracing::error!("Post document {} unavailable: {}", path.display(), err);
	ServiceError::StorageUnavailable(err)
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::DocumentExecutor;
	use crate::{adapters::repositories::PostStore, services::response::ServiceError};

	const LEGACY_DOCUMENT: &str = r#"[
    {
        "id": 1,
        "author": "A",
        "title": "T",
        "content": "C \"quoted\" \\ and ünïcode"
    },
    {
        "id": 2,
        "author": "B",
        "title": "U",
        "content": "D",
        "likes": 4
    }
]
"#;

	#[tokio::test]
	async fn test_load_missing_document() {
		let dir = tempfile::tempdir().unwrap();
		let executor = DocumentExecutor::new(dir.path().join("blog_posts.json"));

		assert!(matches!(executor.load().await, Err(ServiceError::StorageUnavailable(_))));
	}

	#[tokio::test]
	async fn test_load_malformed_document() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("blog_posts.json");
		std::fs::write(&path, "[{\"id\": 1,").unwrap();

		assert!(matches!(DocumentExecutor::new(path).load().await, Err(ServiceError::StorageUnavailable(_))));
	}

	#[tokio::test]
	async fn test_save_into_missing_directory() {
		let dir = tempfile::tempdir().unwrap();
		let executor = DocumentExecutor::new(dir.path().join("nowhere").join("blog_posts.json"));

		assert!(matches!(executor.save(&Default::default()).await, Err(ServiceError::StorageUnavailable(_))));
	}

	#[tokio::test]
	async fn test_round_trip_is_byte_identical() {
		'_given: {
			let dir = tempfile::tempdir().unwrap();
			let path = dir.path().join("blog_posts.json");
			std::fs::write(&path, LEGACY_DOCUMENT).unwrap();
			let executor = DocumentExecutor::new(&path);

			'_when: {
				let posts = executor.load().await.unwrap();
				assert_eq!(posts[0].likes, None);
				assert_eq!(posts[1].likes, Some(Some(4)));
				assert_eq!(posts[0].content, "C \"quoted\" \\ and ünïcode");

				executor.save(&posts).await.unwrap();
			}

			assert_eq!(std::fs::read_to_string(&path).unwrap(), LEGACY_DOCUMENT);
			assert!(!dir.path().join("blog_posts.json.tmp").exists());
		}
	}

	#[tokio::test]
	async fn test_unknown_keys_and_nulls_survive() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("blog_posts.json");
		std::fs::write(
			&path,
			json!([{"id": 3, "author": null, "title": "T", "content": "C", "tags": ["rust"]}]).to_string(),
		)
		.unwrap();
		let executor = DocumentExecutor::new(&path);

		let posts = executor.load().await.unwrap();
		assert_eq!(posts[0].author, "");
		executor.save(&posts).await.unwrap();

		let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(saved, json!([{"id": 3, "author": "", "title": "T", "content": "C", "tags": ["rust"]}]));
	}

	#[tokio::test]
	async fn test_null_likes_stays_null() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("blog_posts.json");
		std::fs::write(&path, r#"[{"id": 1, "author": "A", "title": "T", "content": "C", "likes": null}]"#).unwrap();
		let executor = DocumentExecutor::new(&path);

		let posts = executor.load().await.unwrap();
		assert_eq!(posts[0].likes, Some(None));
		executor.save(&posts).await.unwrap();

		let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(saved, json!([{"id": 1, "author": "A", "title": "T", "content": "C", "likes": null}]));
	}

	#[tokio::test]
	async fn test_create_if_missing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("blog_posts.json");
		let executor = DocumentExecutor::new(&path);

		assert!(executor.create_if_missing().await.unwrap());
		assert!(!executor.create_if_missing().await.unwrap());
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
		assert!(executor.load().await.unwrap().is_empty());
	}
}
