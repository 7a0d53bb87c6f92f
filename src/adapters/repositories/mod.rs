pub(crate) mod post_repository;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{domain::post::PostCollection, services::response::ServiceError};

pub use post_repository::UnitOfWork;

/// Whole-collection access to wherever the posts live.
#[async_trait]
pub trait PostStore: Send + Sync {
	async fn load(&self) -> Result<PostCollection, ServiceError>;
	async fn save(
		&self,
		posts: &PostCollection,
	) -> Result<(), ServiceError>;
}

/// Serialises access to a [`PostStore`]. Readers share the lock; a unit of work holds it
/// exclusively from load until commit or drop.
pub struct Repository<S: PostStore> {
	pub executor: Arc<RwLock<S>>,
}

impl<S: PostStore> Repository<S> {
	pub fn new(executor: Arc<RwLock<S>>) -> Self {
		Self { executor }
	}
}

impl<S: PostStore> Clone for Repository<S> {
	fn clone(&self) -> Self {
		Self {
			executor: self.executor.clone(),
		}
	}
}
