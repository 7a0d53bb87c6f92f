use crate::{
	adapters::repositories::{PostStore, Repository},
	domain::post::{
		commands::{CreatePost, DeletePost, LikePost, UpdatePost},
		entity::Post,
		PostCollection,
	},
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	pub async fn list<S: PostStore>(repository: &Repository<S>) -> Result<PostCollection, ServiceError> {
		repository.get().await
	}

	pub async fn get<S: PostStore>(
		id: i64,
		repository: &Repository<S>,
	) -> Result<Post, ServiceError> {
		repository.get().await?.find(id).cloned().ok_or(ServiceError::EntityNotFound)
	}

	pub async fn create<S: PostStore>(
		cmd: CreatePost,
		repository: &Repository<S>,
	) -> Result<Post, ServiceError> {
		let mut uow = repository.begin().await?;
		let post = uow.add(cmd)?.clone();
		uow.commit().await?;

		tracing::info!("Post {} created", post.id);
		Ok(post)
	}

	/// Fails with `EntityNotFound` without touching storage when the id is unknown.
	pub async fn update<S: PostStore>(
		cmd: UpdatePost,
		repository: &Repository<S>,
	) -> Result<Post, ServiceError> {
		let mut uow = repository.begin().await?;
		let Some(post) = uow.revise(cmd).cloned() else {
			uow.rollback();
			return Err(ServiceError::EntityNotFound);
		};
		uow.commit().await?;

		tracing::info!("Post {} updated", post.id);
		Ok(post)
	}

	/// Unknown ids are not an error; the document is rewritten either way.
	pub async fn delete<S: PostStore>(
		cmd: DeletePost,
		repository: &Repository<S>,
	) -> Result<bool, ServiceError> {
		let mut uow = repository.begin().await?;
		let removed = uow.remove(cmd.id);
		uow.commit().await?;

		if removed {
			tracing::info!("Post {} deleted", cmd.id);
		}
		Ok(removed)
	}

	/// Returns the new like count, or `None` (and saves nothing) if the post does not exist.
	pub async fn like<S: PostStore>(
		cmd: LikePost,
		repository: &Repository<S>,
	) -> Result<Option<u64>, ServiceError> {
		let mut uow = repository.begin().await?;
		let Some(likes) = uow.like(cmd.id)? else {
			uow.rollback();
			tracing::debug!("Like on missing post {} ignored", cmd.id);
			return Ok(None);
		};
		uow.commit().await?;
		Ok(Some(likes))
	}
}
