//! Caller-supplied settings merged into every request.
//!
//! A [`Config`] is immutable once built. It can be assembled with [`ConfigBuilder`] or loaded
//! from loose JSON, where credential keys match in any casing (`TOKEN`, `Token`, `token`) and
//! unknown keys are kept as [`Properties`] that flow through to the request options.

/// Fluent builder for [`Config`] values.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{Credentials, is_credential_key},
	endpoint::DEFAULT_API_URL,
	error::ConfigError,
	options::Headers,
	props::Properties,
};

/// Immutable request configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct Config {
	/// API base URL prepended to relative paths.
	pub apiurl: Option<String>,
	/// Token or basic-auth credentials.
	pub credentials: Credentials,
	/// Default headers; per-call defaults only fill the gaps.
	pub headers: Headers,
	/// Method used when a call does not name one.
	pub method: Option<String>,
	/// Path used when a call passes an empty one.
	pub path: Option<String>,
	/// Request body carried into the options.
	pub body: Option<Value>,
	/// Value for the `user-agent` option.
	pub user_agent: Option<String>,
	/// Every other caller-supplied field.
	pub extra: Properties,
}
impl Config {
	/// Creates a new builder.
	pub fn builder() -> ConfigBuilder {
		ConfigBuilder::new()
	}

	/// Parses a config from JSON text, reporting the path of any malformed field.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::Deserialize { source })
	}

	/// Converts an already-parsed JSON value into a config.
	pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
		serde_path_to_error::deserialize(value)
			.map_err(|source| ConfigError::Deserialize { source })
	}

	/// Effective API base URL, falling back to [`DEFAULT_API_URL`] when unset or empty.
	pub fn api_url(&self) -> &str {
		non_empty(self.apiurl.as_deref()).unwrap_or(DEFAULT_API_URL)
	}

	/// Checks the invariants enforced by strict builds.
	///
	/// Requires a non-empty token or a full username/password pair, and an absolute http(s)
	/// API URL.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.credentials.is_complete() {
			return Err(ConfigError::MissingCredentials);
		}

		let raw = self.api_url();
		let url = Url::parse(raw)
			.map_err(|source| ConfigError::InvalidApiUrl { url: raw.to_owned(), source })?;

		match url.scheme() {
			"http" | "https" => Ok(()),
			_ => Err(ConfigError::UnsupportedScheme { url: raw.to_owned() }),
		}
	}
}

#[derive(Deserialize)]
struct RawConfig {
	apiurl: Option<String>,
	#[serde(default)]
	headers: Headers,
	method: Option<String>,
	path: Option<String>,
	body: Option<Value>,
	#[serde(rename = "user-agent")]
	user_agent: Option<String>,
	#[serde(flatten)]
	rest: Map<String, Value>,
}
impl From<RawConfig> for Config {
	fn from(raw: RawConfig) -> Self {
		let credentials = Credentials::from_map(&raw.rest);
		let extra = raw.rest.into_iter().filter(|(k, _)| !is_credential_key(k)).collect();

		Self {
			apiurl: raw.apiurl,
			credentials,
			headers: raw.headers,
			method: raw.method,
			path: raw.path,
			body: raw.body,
			user_agent: raw.user_agent,
			extra,
		}
	}
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn json_config_normalizes_credentials_and_keeps_extras() {
		let config = Config::from_json_str(
			r#"{
				"TOKEN": "abc",
				"Username": "octocat",
				"apiurl": "https://ghe.local/api/v3",
				"user-agent": "my-agent",
				"headers": { "Accept": "application/vnd.github+json" },
				"owner": "foo"
			}"#,
		)
		.expect("Config fixture should parse.");

		assert_eq!(config.credentials.token.as_ref().map(|s| s.expose()), Some("abc"));
		assert_eq!(config.credentials.username.as_ref().map(|s| s.expose()), Some("octocat"));
		assert_eq!(config.api_url(), "https://ghe.local/api/v3");
		assert_eq!(config.user_agent.as_deref(), Some("my-agent"));
		assert_eq!(config.headers.get("accept"), Some("application/vnd.github+json"));
		assert_eq!(config.extra.keys().collect::<Vec<_>>(), ["owner"]);
	}

	#[test]
	fn json_errors_carry_the_path() {
		let err = Config::from_json_value(json!({ "headers": { "accept": ["x"] } }))
			.expect_err("Non-scalar header values must be rejected.");
		let ConfigError::Deserialize { source } = err else {
			panic!("Expected a deserialize error, got {err:?}.");
		};

		assert_eq!(source.path().to_string(), "headers.accept");
	}

	#[test]
	fn empty_apiurl_falls_back_to_default() {
		let config = Config { apiurl: Some(String::new()), ..Default::default() };

		assert_eq!(config.api_url(), DEFAULT_API_URL);
	}

	#[test]
	fn validate_requires_credentials() {
		let err = Config::default().validate().expect_err("Empty config must fail validation.");

		assert!(matches!(err, ConfigError::MissingCredentials));

		let config = Config::builder().username("u").build();

		assert!(matches!(config.validate(), Err(ConfigError::MissingCredentials)));

		Config::builder()
			.username("u")
			.password("p")
			.build()
			.validate()
			.expect("A full basic pair should pass validation.");
		Config::builder()
			.token("t")
			.build()
			.validate()
			.expect("A token should pass validation.");
	}

	#[test]
	fn validate_rejects_unusable_api_urls() {
		let config = Config::builder().token("t").apiurl("api.github.com").build();

		assert!(matches!(config.validate(), Err(ConfigError::InvalidApiUrl { .. })));

		let config = Config::builder().token("t").apiurl("ftp://example.com").build();

		assert!(matches!(config.validate(), Err(ConfigError::UnsupportedScheme { .. })));
	}
}
