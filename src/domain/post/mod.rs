use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use self::{
	commands::{CreatePost, UpdatePost},
	entity::Post,
};
use crate::services::response::ServiceError;
pub mod commands;
pub mod entity;

/// The whole ordered set of posts, loaded and saved as one document.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostCollection(Vec<Post>);

impl PostCollection {
	/// Highest id plus one, or 1 when empty. Deleting the highest post frees its id for reuse.
	pub fn next_id(&self) -> Result<i64, ServiceError> {
		match self.iter().map(|post| post.id).max() {
			None => Ok(1),
			Some(id) => id.checked_add(1).ok_or(ServiceError::CounterOverflow("id")),
		}
	}

	pub fn add(
		&mut self,
		cmd: CreatePost,
	) -> Result<&Post, ServiceError> {
		let post = Post {
			id: self.next_id()?,
			author: cmd.author,
			title: cmd.title,
			content: cmd.content,
			likes: Some(Some(0)),
			extra: Default::default(),
		};
		let index = self.0.len();
		self.0.push(post);
		Ok(&self.0[index])
	}

	pub fn find(
		&self,
		id: i64,
	) -> Option<&Post> {
		self.iter().find(|post| post.id == id)
	}

	pub fn find_mut(
		&mut self,
		id: i64,
	) -> Option<&mut Post> {
		self.iter_mut().find(|post| post.id == id)
	}

	/// Overwrites author, title and content in place. `likes` is left alone.
	pub fn revise(
		&mut self,
		cmd: UpdatePost,
	) -> Option<&Post> {
		let post = self.find_mut(cmd.id)?;
		post.author = cmd.author;
		post.title = cmd.title;
		post.content = cmd.content;
		Some(&*post)
	}

	/// Returns whether anything was removed.
	pub fn remove(
		&mut self,
		id: i64,
	) -> bool {
		let before = self.0.len();
		self.0.retain(|post| post.id != id);
		self.0.len() != before
	}

	/// Returns the new counter, or `None` if there is no such post. A missing or `null` counter
	/// counts as 0.
	pub fn like(
		&mut self,
		id: i64,
	) -> Result<Option<u64>, ServiceError> {
		let Some(post) = self.find_mut(id) else {
			return Ok(None);
		};
		let likes = post.likes().checked_add(1).ok_or(ServiceError::CounterOverflow("likes"))?;
		post.likes = Some(Some(likes));
		Ok(Some(likes))
	}
}

impl From<Vec<Post>> for PostCollection {
	fn from(value: Vec<Post>) -> Self {
		Self(value)
	}
}

impl Deref for PostCollection {
	type Target = Vec<Post>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl DerefMut for PostCollection {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}
