//! Token and basic-auth credentials, including case-insensitive extraction from loose maps.

// self
use crate::{_prelude::*, auth::Secret, options::is_truthy};

/// Field names that carry credentials, in their normalized (lowercase) form.
pub const CREDENTIAL_KEYS: [&str; 3] = ["token", "username", "password"];

/// Credentials used to derive the `authorization` header.
///
/// A non-empty token takes precedence over the username/password pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
	/// Personal access or OAuth token.
	pub token: Option<Secret>,
	/// Basic-auth username.
	pub username: Option<Secret>,
	/// Basic-auth password.
	pub password: Option<Secret>,
}
impl Credentials {
	/// Creates token-only credentials.
	pub fn token(token: impl Into<Secret>) -> Self {
		Self { token: Some(token.into()), ..Default::default() }
	}

	/// Creates username/password credentials.
	pub fn basic(username: impl Into<Secret>, password: impl Into<Secret>) -> Self {
		Self { token: None, username: Some(username.into()), password: Some(password.into()) }
	}

	/// Extracts credentials from a loose map, matching keys case-insensitively.
	///
	/// When one field appears under several casings, the exact lowercase key wins; otherwise
	/// the last key in map order wins. `null` and non-scalar values count as absent.
	pub fn from_map(map: &Map<String, Value>) -> Self {
		let mut creds = Self::default();
		let mut exact = [false; 3];

		for (key, value) in map {
			let Some(idx) = credential_index(key) else {
				continue;
			};

			if exact[idx] {
				continue;
			}

			exact[idx] = key == CREDENTIAL_KEYS[idx];
			*creds.slot_mut(idx) = credential_secret(idx, value);
		}

		creds
	}

	/// Assigns `value` to the credential named by `key` in any casing.
	///
	/// Returns `false`, leaving the credentials untouched, when `key` is not a credential name.
	pub fn set(&mut self, key: &str, value: &Value) -> bool {
		let Some(idx) = credential_index(key) else {
			return false;
		};

		*self.slot_mut(idx) = credential_secret(idx, value);

		true
	}

	/// Returns the token when present and non-empty.
	pub fn effective_token(&self) -> Option<&Secret> {
		self.token.as_ref().filter(|t| !t.is_empty())
	}

	/// Returns the scheme [`create_auth`](crate::auth::create_auth) will emit.
	pub fn kind(&self) -> crate::auth::AuthKind {
		if self.effective_token().is_some() {
			crate::auth::AuthKind::Token
		} else {
			crate::auth::AuthKind::Basic
		}
	}

	/// Returns `true` when a usable token or a full username/password pair is present.
	pub fn is_complete(&self) -> bool {
		self.effective_token().is_some() || (self.username.is_some() && self.password.is_some())
	}

	fn slot_mut(&mut self, idx: usize) -> &mut Option<Secret> {
		match idx {
			0 => &mut self.token,
			1 => &mut self.username,
			_ => &mut self.password,
		}
	}
}

/// Returns `true` if `key` names a credential field in any casing.
pub fn is_credential_key(key: &str) -> bool {
	credential_index(key).is_some()
}

fn credential_index(key: &str) -> Option<usize> {
	let lowered = key.to_lowercase();

	CREDENTIAL_KEYS.iter().position(|k| *k == lowered)
}

// A falsy token (`false`, `0`, `""`) counts as absent.
fn credential_secret(idx: usize, value: &Value) -> Option<Secret> {
	if idx == 0 && !is_truthy(value) {
		return None;
	}

	match value {
		Value::String(s) => Some(Secret::new(s.as_str())),
		Value::Number(n) => Some(Secret::new(n.to_string())),
		Value::Bool(b) => Some(Secret::new(b.to_string())),
		_ => None,
	}
}
