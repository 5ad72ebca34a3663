// self
use crate::{
	_prelude::*,
	auth::{create_auth, is_credential_key},
	config::{Config, non_empty},
	endpoint::create_url,
	obs::{BuildOutcome, BuildTrace},
	options::{
		ACCEPT, APPLICATION_JSON, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, RequestOptions,
	},
};

/// Method used when neither the call nor the config names one.
pub const DEFAULT_METHOD: &str = "GET";
/// User agent used when the config does not name one.
pub const DEFAULT_USER_AGENT: &str = "github-base-nodejs";
/// Option names owned by [`RequestOptions`] fields; extras under these names are dropped.
pub const RESERVED_KEYS: [&str; 6] = ["path", "method", "headers", "user-agent", "apiurl", "body"];

/// Captures a [`Config`] once and builds fresh [`RequestOptions`] per call.
///
/// The captured config is never mutated, so one instance can serve any number of calls, from
/// any number of threads.
#[derive(Clone, Debug, Default)]
pub struct RequestDefaults {
	config: Config,
}
impl RequestDefaults {
	/// Captures `config` for subsequent builds.
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Returns the captured config.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Builds options for one call using the current UTC time for cache busting.
	///
	/// `data` only signals whether a body accompanies the call; it counts as present when
	/// truthy (see [`is_truthy`]). The build is total: absent credentials degrade to a bogus
	/// basic header instead of failing.
	pub fn build(&self, method: Option<&str>, path: &str, data: Option<&Value>) -> RequestOptions {
		self.build_at(OffsetDateTime::now_utc(), method, path, data)
	}

	/// Same as [`build`](Self::build) with an explicit clock reading.
	pub fn build_at(
		&self,
		now: OffsetDateTime,
		method: Option<&str>,
		path: &str,
		data: Option<&Value>,
	) -> RequestOptions {
		let config = &self.config;
		let method = non_empty(method)
			.or_else(|| non_empty(config.method.as_deref()))
			.unwrap_or(DEFAULT_METHOD)
			.to_owned();
		let auth = config.credentials.kind();
		let trace = BuildTrace::start(&method, auth);
		let apiurl = config.api_url().to_owned();
		let path = if path.is_empty() { config.path.as_deref().unwrap_or_default() } else { path };
		let path = create_url(path, &apiurl, now);
		let mut headers = config.headers.clone();

		if data.is_some_and(is_truthy) {
			headers.insert_default(CONTENT_TYPE, APPLICATION_JSON);
		}

		headers.insert_default(ACCEPT, APPLICATION_JSON);

		let has_body = data.is_some_and(is_truthy) || config.body.as_ref().is_some_and(is_truthy);

		if !has_body && method.eq_ignore_ascii_case("put") {
			headers.insert(CONTENT_LENGTH, "0");
		}

		headers.insert(AUTHORIZATION, create_auth(&config.credentials));

		let user_agent =
			non_empty(config.user_agent.as_deref()).unwrap_or(DEFAULT_USER_AGENT).to_owned();
		let mut extra = config.extra.clone();

		extra.retain(|k| !is_credential_key(k) && !RESERVED_KEYS.contains(&k));
		trace.finish(if config.credentials.is_complete() {
			BuildOutcome::Success
		} else {
			BuildOutcome::Degraded
		});

		RequestOptions {
			path,
			method,
			headers,
			user_agent,
			apiurl,
			body: config.body.clone(),
			extra,
		}
	}

	/// Strict variant of [`build`](Self::build) that rejects unusable configs.
	pub fn try_build(
		&self,
		method: Option<&str>,
		path: &str,
		data: Option<&Value>,
	) -> Result<RequestOptions> {
		self.try_build_at(OffsetDateTime::now_utc(), method, path, data)
	}

	/// Strict variant of [`build_at`](Self::build_at).
	///
	/// Runs [`Config::validate`] first, so configs without a token or a username/password pair,
	/// or with an unusable API URL, fail with a [`ConfigError`](crate::error::ConfigError).
	pub fn try_build_at(
		&self,
		now: OffsetDateTime,
		method: Option<&str>,
		path: &str,
		data: Option<&Value>,
	) -> Result<RequestOptions> {
		if let Err(e) = self.config.validate() {
			let method = non_empty(method)
				.or_else(|| non_empty(self.config.method.as_deref()))
				.unwrap_or(DEFAULT_METHOD);

			BuildTrace::start(method, self.config.credentials.kind())
				.finish(BuildOutcome::Rejected);

			return Err(e.into());
		}

		Ok(self.build_at(now, method, path, data))
	}
}
impl From<Config> for RequestDefaults {
	fn from(config: Config) -> Self {
		Self::new(config)
	}
}

/// Captures `config` and returns a builder closure taking `(method, path, data)`.
pub fn defaults(
	config: Config,
) -> impl Fn(Option<&str>, &str, Option<&Value>) -> RequestOptions {
	let defaults = RequestDefaults::new(config);

	move |method: Option<&str>, path: &str, data: Option<&Value>| {
		defaults.build(method, path, data)
	}
}

/// JavaScript-style truthiness: `null`, `false`, numeric zero and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
