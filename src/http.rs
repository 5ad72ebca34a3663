//! Conversion of [`RequestOptions`] into an unsent reqwest request.
//!
//! The crate never executes requests. [`RequestOptions::to_reqwest`] only assembles a
//! [`reqwest::Request`] through the caller's [`ReqwestClient`], so client-level settings
//! (timeouts, proxies, TLS) still apply when the caller runs it.

// crates.io
use reqwest::{
	Method, Request,
	header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	error::RequestError,
	options::{AUTHORIZATION, RequestOptions, is_truthy},
};

impl RequestOptions {
	/// Assembles a [`Request`] from these options without sending it.
	///
	/// The method is uppercased and the `user-agent` option becomes the `User-Agent` header.
	/// The body is `data` serialized as JSON when truthy, otherwise the options' own `body`
	/// when truthy, otherwise empty.
	pub fn to_reqwest(&self, client: &ReqwestClient, data: Option<&Value>) -> Result<Request> {
		let method = Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())
			.map_err(|_| RequestError::InvalidMethod { method: self.method.clone() })?;
		let url = Url::parse(&self.path)
			.map_err(|source| RequestError::InvalidUrl { url: self.path.clone(), source })?;
		let mut headers = HeaderMap::with_capacity(self.headers.len() + 1);

		for (name, value) in self.headers.iter() {
			let mut value = header_value(name, value)?;

			if name == AUTHORIZATION {
				value.set_sensitive(true);
			}

			headers.insert(header_name(name)?, value);
		}

		headers.insert(USER_AGENT, header_value("user-agent", &self.user_agent)?);

		let mut builder = client.request(method, url).headers(headers);
		let payload =
			data.filter(|d| is_truthy(d)).or_else(|| self.body.as_ref().filter(|b| is_truthy(b)));

		if let Some(payload) = payload {
			builder = builder.body(serde_json::to_vec(payload).map_err(RequestError::Body)?);
		}

		Ok(builder.build().map_err(RequestError::from)?)
	}
}

fn header_name(name: &str) -> Result<HeaderName, RequestError> {
	HeaderName::from_bytes(name.as_bytes())
		.map_err(|_| RequestError::InvalidHeader { name: name.to_owned() })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, RequestError> {
	HeaderValue::from_str(value).map_err(|_| RequestError::InvalidHeader { name: name.to_owned() })
}
