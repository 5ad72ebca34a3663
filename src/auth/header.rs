//! `authorization` header construction.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Credentials, obs};

/// Placeholder rendered for a missing username or password in the basic credential pair.
pub const UNDEFINED: &str = "undefined";

/// Authorization scheme derived from a set of [`Credentials`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthKind {
	/// `token <T>` scheme.
	Token,
	/// `Basic <base64(user:pass)>` scheme.
	Basic,
}
impl AuthKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthKind::Token => "token",
			AuthKind::Basic => "basic",
		}
	}
}
impl Display for AuthKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Builds the `authorization` header value.
///
/// A non-empty token yields `token <T>`. Otherwise the header is HTTP Basic over
/// `username:password`, where a missing part is rendered as `undefined`; that header is
/// well formed but will be rejected upstream.
pub fn create_auth(credentials: &Credentials) -> String {
	if let Some(token) = credentials.effective_token() {
		return format!("token {}", token.expose());
	}

	let username = credentials.username.as_ref().map_or(UNDEFINED, |s| s.expose());
	let password = credentials.password.as_ref().map_or(UNDEFINED, |s| s.expose());

	if credentials.username.is_none() || credentials.password.is_none() {
		let (has_username, has_password) =
			(credentials.username.is_some(), credentials.password.is_some());

		obs::warn_incomplete_credentials(has_username, has_password);
		obs::record_incomplete_credentials(has_username, has_password);
	}

	format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
