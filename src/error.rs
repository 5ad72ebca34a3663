//! Crate-level error types shared by config loading, strict builds, and request conversion.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Config could not be loaded or failed strict validation.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request options could not be turned into a transport request.
	#[error(transparent)]
	Request(#[from] RequestError),
}

/// Config loading and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Neither a token nor a username/password pair was supplied.
	#[error("Config carries neither a token nor a username and password.")]
	MissingCredentials,
	/// The API base URL cannot be parsed.
	#[error("API URL `{url}` is invalid.")]
	InvalidApiUrl {
		/// URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The API base URL uses a scheme other than http or https.
	#[error("API URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// URL that failed validation.
		url: String,
	},
	/// JSON config could not be deserialized.
	#[error("Config JSON is malformed at `{}`.", .source.path())]
	Deserialize {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Failures raised while converting request options into a transport request.
#[derive(Debug, ThisError)]
pub enum RequestError {
	/// Method string is not a valid HTTP method token.
	#[error("HTTP method `{method}` is invalid.")]
	InvalidMethod {
		/// Method as found in the options.
		method: String,
	},
	/// Request path is not an absolute URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidUrl {
		/// URL as found in the options.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Header name or value cannot be encoded.
	#[error("Header `{name}` cannot be encoded.")]
	InvalidHeader {
		/// Offending header name.
		name: String,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Body(#[source] serde_json::Error),
	/// The HTTP client refused to assemble the request.
	#[error("HTTP request could not be constructed.")]
	Build {
		/// Underlying client failure.
		#[source]
		source: BoxError,
	},
}
impl RequestError {
	/// Wraps a client builder failure inside [`RequestError`].
	pub fn build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Build { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for RequestError {
	fn from(e: ReqwestError) -> Self {
		Self::build(e)
	}
}
