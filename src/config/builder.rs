// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	config::Config,
	options::Headers,
	props::{Properties, define_prop},
};

/// Builder for [`Config`] values.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
	apiurl: Option<String>,
	credentials: Credentials,
	headers: Headers,
	method: Option<String>,
	path: Option<String>,
	body: Option<Value>,
	user_agent: Option<String>,
	extra: Properties,
}
impl ConfigBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the API base URL.
	pub fn apiurl(mut self, url: impl Into<String>) -> Self {
		self.apiurl = Some(url.into());

		self
	}

	/// Sets the token used for `token <T>` authorization.
	pub fn token(mut self, token: impl Into<Secret>) -> Self {
		self.credentials.token = Some(token.into());

		self
	}

	/// Sets the basic-auth username.
	pub fn username(mut self, username: impl Into<Secret>) -> Self {
		self.credentials.username = Some(username.into());

		self
	}

	/// Sets the basic-auth password.
	pub fn password(mut self, password: impl Into<Secret>) -> Self {
		self.credentials.password = Some(password.into());

		self
	}

	/// Replaces all credentials at once.
	pub fn credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = credentials;

		self
	}

	/// Adds a default header; the name is stored lowercase.
	pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Sets the fallback method.
	pub fn method(mut self, method: impl Into<String>) -> Self {
		self.method = Some(method.into());

		self
	}

	/// Sets the fallback path.
	pub fn path(mut self, path: impl Into<String>) -> Self {
		self.path = Some(path.into());

		self
	}

	/// Sets the request body carried into the options.
	pub fn body(mut self, body: impl Into<Value>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Sets the `user-agent` option.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Adds an arbitrary field.
	///
	/// Credential names in any casing (`TOKEN`, `Username`, ...) are routed into the
	/// credentials, and the option names `apiurl`, `method`, `path`, `user-agent`, `body` and
	/// `headers` into their typed fields, matching how loose JSON configs are read. `null`
	/// clears a typed field.
	pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let key = key.into();
		let value = value.into();

		if self.credentials.set(&key, &value) {
			return self;
		}

		match key.as_str() {
			"apiurl" => self.apiurl = scalar_string(value),
			"method" => self.method = scalar_string(value),
			"path" => self.path = scalar_string(value),
			"user-agent" => self.user_agent = scalar_string(value),
			"body" => self.body = Some(value).filter(|v| !v.is_null()),
			"headers" =>
				if let Value::Object(map) = value {
					for (name, v) in map {
						if let Some(v) = scalar_string(v) {
							self.headers.insert(name, v);
						}
					}
				},
			_ => {
				self.extra.insert(key, value);
			},
		}

		self
	}

	/// Attaches a non-enumerable field that is reachable through
	/// [`Properties::get`] but never serialized.
	pub fn hidden_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		define_prop(&mut self.extra, key, value);

		self
	}

	/// Finalizes the config.
	pub fn build(self) -> Config {
		Config {
			apiurl: self.apiurl,
			credentials: self.credentials,
			headers: self.headers,
			method: self.method,
			path: self.path,
			body: self.body,
			user_agent: self.user_agent,
			extra: self.extra,
		}
	}
}

fn scalar_string(value: Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s),
		other => Some(other.to_string()),
	}
}
