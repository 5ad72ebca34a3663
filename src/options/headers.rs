// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// `authorization` header name.
pub const AUTHORIZATION: &str = "authorization";
/// `accept` header name.
pub const ACCEPT: &str = "accept";
/// `content-type` header name.
pub const CONTENT_TYPE: &str = "content-type";
/// `content-length` header name.
pub const CONTENT_LENGTH: &str = "content-length";
/// Media type used for `accept` and `content-type` defaults.
pub const APPLICATION_JSON: &str = "application/json";

/// Header map keyed by lowercase name.
///
/// Names are normalized on insert and lookup, so `Content-Type` and `content-type` address the
/// same entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, String>);
impl Headers {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
		self.0.get(&normalize(name.as_ref())).map(String::as_str)
	}

	/// Returns `true` when `name` is set to a non-empty value.
	pub fn is_set(&self, name: impl AsRef<str>) -> bool {
		self.get(name).is_some_and(|v| !v.is_empty())
	}

	/// Sets `name`, returning the previous value.
	pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
		self.0.insert(normalize(name.as_ref()), value.into())
	}

	/// Sets `name` only when it is missing or empty.
	pub fn insert_default(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
		if !self.is_set(name.as_ref()) {
			self.insert(name, value);
		}
	}

	/// Removes `name`, returning its value.
	pub fn remove(&mut self, name: impl AsRef<str>) -> Option<String> {
		self.0.remove(&normalize(name.as_ref()))
	}

	/// Iterates headers in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of headers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no headers are set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for Headers
where
	K: AsRef<str>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut headers = Self::new();

		for (k, v) in iter {
			headers.insert(k, v);
		}

		headers
	}
}
impl<'de> Deserialize<'de> for Headers {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(BTreeMap::<String, HeaderScalar>::deserialize(deserializer)?
			.into_iter()
			.map(|(k, v)| (k, v.into_string()))
			.collect())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeaderScalar {
	String(String),
	Number(serde_json::Number),
	Bool(bool),
}
impl HeaderScalar {
	fn into_string(self) -> String {
		match self {
			HeaderScalar::String(s) => s,
			HeaderScalar::Number(n) => n.to_string(),
			HeaderScalar::Bool(b) => b.to_string(),
		}
	}
}

fn normalize(name: &str) -> String {
	name.to_ascii_lowercase()
}
