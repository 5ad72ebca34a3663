//! Finished request options and the per-call builder that produces them.

/// Per-call builder merging a [`Config`](crate::config::Config) into [`RequestOptions`].
pub mod defaults;
/// Case-insensitive header map.
pub mod headers;

pub use defaults::*;
pub use headers::*;

// self
use crate::{_prelude::*, props::Properties};

/// Options handed to an HTTP client for a single request.
///
/// Serializes to the loose mapping shape HTTP clients expect: `path`, `method`, `headers`,
/// `user-agent`, `apiurl`, an optional `body`, and every enumerable extra field flattened
/// alongside. Raw credential fields never appear; credentials only surface through the
/// `authorization` header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestOptions {
	/// Fully qualified URL, including the cache-busting timestamp.
	pub path: String,
	/// HTTP method as supplied by the caller (case preserved).
	pub method: String,
	/// Request headers; always carries `authorization` and `accept`.
	pub headers: Headers,
	/// Client user agent.
	#[serde(rename = "user-agent")]
	pub user_agent: String,
	/// API base URL the path was resolved against.
	pub apiurl: String,
	/// Request body copied from the config.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<Value>,
	/// Remaining caller-supplied fields.
	#[serde(flatten)]
	pub extra: Properties,
}
impl RequestOptions {
	/// Returns the `authorization` header value.
	pub fn authorization(&self) -> Option<&str> {
		self.headers.get(AUTHORIZATION)
	}
}
