/// Key/value fields of an add or update submission. Missing keys become empty strings.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PostForm {
	pub author: String,
	pub title: String,
	pub content: String,
}

impl PostForm {
	/// The first value wins when a key repeats; unknown keys are ignored.
	pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
		let (mut author, mut title, mut content) = (None, None, None);
		for (key, value) in pairs {
			let slot = match key.as_str() {
				"author" => &mut author,
				"title" => &mut title,
				"content" => &mut content,
				_ => continue,
			};
			slot.get_or_insert(value);
		}
		Self {
			author: author.unwrap_or_default(),
			title: title.unwrap_or_default(),
			content: content.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub struct CreatePost {
	pub author: String,
	pub title: String,
	pub content: String,
}

impl From<PostForm> for CreatePost {
	fn from(value: PostForm) -> Self {
		Self {
			author: value.author,
			title: value.title,
			content: value.content,
		}
	}
}

#[derive(Debug, Clone)]
pub struct UpdatePost {
	pub id: i64,
	pub author: String,
	pub title: String,
	pub content: String,
}

impl UpdatePost {
	pub fn new(
		id: i64,
		form: PostForm,
	) -> Self {
		Self {
			id,
			author: form.author,
			title: form.title,
			content: form.content,
		}
	}
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePost {
	pub id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct LikePost {
	pub id: i64,
}

#[cfg(test)]
mod test {
	use super::PostForm;

	fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
		raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
	}

	#[test]
	fn test_first_value_wins_and_missing_is_empty() {
		let form = PostForm::from_pairs(pairs(&[("author", "a"), ("author", "b"), ("title", "t"), ("extra", "x")]));

		assert_eq!(
			form,
			PostForm {
				author: "a".to_string(),
				title: "t".to_string(),
				content: String::new(),
			}
		);
		assert_eq!(PostForm::from_pairs(Vec::new()), PostForm::default());
	}
}
