use std::ops::{Deref, DerefMut};

use tokio::sync::RwLockWriteGuard;

use crate::{domain::post::PostCollection, services::response::ServiceError};

use super::{PostStore, Repository};

impl<S: PostStore> Repository<S> {
	/// Fresh snapshot under the shared lock.
	pub async fn get(&self) -> Result<PostCollection, ServiceError> {
		self.executor.read().await.load().await
	}

	/// Takes the exclusive lock and loads the collection. Nothing is written unless
	/// [`UnitOfWork::commit`] is called.
	pub async fn begin(&self) -> Result<UnitOfWork<'_, S>, ServiceError> {
		let executor = self.executor.write().await;
		let posts = executor.load().await?;
		Ok(UnitOfWork { executor, posts })
	}
}

pub struct UnitOfWork<'a, S: PostStore> {
	executor: RwLockWriteGuard<'a, S>,
	posts: PostCollection,
}

impl<'a, S: PostStore> UnitOfWork<'a, S> {
	pub async fn commit(self) -> Result<(), ServiceError> {
		self.executor.save(&self.posts).await
	}

	/// Drops the loaded state without saving.
	pub fn rollback(self) {}
}

impl<'a, S: PostStore> Deref for UnitOfWork<'a, S> {
	type Target = PostCollection;
	fn deref(&self) -> &Self::Target {
		&self.posts
	}
}
impl<'a, S: PostStore> DerefMut for UnitOfWork<'a, S> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.posts
	}
}
