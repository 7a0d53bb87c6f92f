use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single blog entry as it is laid out in the backing document.
///
/// `likes` is `None` when the key is absent (entries written before likes existed) and
/// `Some(None)` when it is an explicit `null`, so saving writes back exactly what was read.
/// Keys this struct does not know about are carried in `extra`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Post {
	pub id: i64,
	#[serde(default, deserialize_with = "nullable_string")]
	pub author: String,
	#[serde(default, deserialize_with = "nullable_string")]
	pub title: String,
	#[serde(default, deserialize_with = "nullable_string")]
	pub content: String,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub likes: Option<Option<u64>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Post {
	pub fn likes(&self) -> u64 {
		self.likes.flatten().unwrap_or_default()
	}
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<u64>>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Some(Option::<u64>::deserialize(deserializer)?))
}
