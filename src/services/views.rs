use std::fmt::Write;

use crate::domain::post::entity::Post;

/// Turns post data into the markup sent back to the browser.
pub trait PostView: Send + Sync {
	fn index(
		&self,
		posts: &[Post],
	) -> String;
	fn add(&self) -> String;
	fn update(
		&self,
		post: &Post,
	) -> String;
}

/// Bare HTML pages: the listing with per-post update/delete/like links, and the two forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlView;

impl PostView for HtmlView {
	fn index(
		&self,
		posts: &[Post],
	) -> String {
		let mut body = String::from("<h1>Welcome to the Blog!</h1>\n<a href=\"/add\">Add a new post</a>\n");
		for post in posts {
			let _ = write!(
				body,
				"<div class=\"post\">\n<h2>{title}</h2>\n<p><em>Written by {author}</em></p>\n<p>{content}</p>\n\
				 <p>Likes: {likes}</p>\n<a href=\"/update/{id}\">Update</a>\n<a href=\"/delete/{id}\">Delete</a>\n\
				 <a href=\"/like/{id}\">Like</a>\n</div>\n",
				id = post.id,
				title = escape(&post.title),
				author = escape(&post.author),
				content = escape(&post.content),
				likes = post.likes(),
			);
		}
		page("Blog", &body)
	}

	fn add(&self) -> String {
		page("Add Post", &form("/add", "Add Post", "", "", "", "Submit"))
	}

	fn update(
		&self,
		post: &Post,
	) -> String {
		page(
			"Update Post",
			&form(&format!("/update/{}", post.id), "Update Post", &post.author, &post.title, &post.content, "Update"),
		)
	}
}

fn form(
	action: &str,
	heading: &str,
	author: &str,
	title: &str,
	content: &str,
	submit: &str,
) -> String {
	format!(
		"<h1>{heading}</h1>\n<form action=\"{action}\" method=\"POST\">\n\
		 <input type=\"text\" name=\"author\" placeholder=\"Author\" value=\"{author}\">\n\
		 <input type=\"text\" name=\"title\" placeholder=\"Title\" value=\"{title}\">\n\
		 <textarea name=\"content\" placeholder=\"Content\">{content}</textarea>\n\
		 <input type=\"submit\" value=\"{submit}\">\n</form>\n",
		author = escape(author),
		title = escape(title),
		content = escape(content),
	)
}

fn page(
	title: &str,
	body: &str,
) -> String {
	format!("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n")
}

fn escape(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());
	for c in raw.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			c => escaped.push(c),
		}
	}
	escaped
}
