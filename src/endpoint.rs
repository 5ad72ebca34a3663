//! Request URL construction with a cache-busting timestamp.

// self
use crate::_prelude::*;

/// Base URL used when a config does not name one.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Builds the fully qualified request URL.
///
/// Paths without `//` are treated as relative and prefixed with `base`. The Unix timestamp of
/// `now` in milliseconds is then appended as a bare query parameter, joined with `?` or `&`
/// depending on whether the URL already carries a query.
pub fn create_url(path: &str, base: &str, now: OffsetDateTime) -> String {
	let mut url = if path.contains("//") { path.to_owned() } else { format!("{base}{path}") };

	url.push(if url.contains('?') { '&' } else { '?' });
	url.push_str(&unix_millis(now).to_string());

	url
}

/// Milliseconds since the Unix epoch for `now`.
pub fn unix_millis(now: OffsetDateTime) -> i128 {
	now.unix_timestamp_nanos() / 1_000_000
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	const NOW: OffsetDateTime = macros::datetime!(2025-01-02 03:04:05.678 UTC);

	#[test]
	fn relative_paths_get_the_base() {
		assert_eq!(
			create_url("/user", DEFAULT_API_URL, NOW),
			"https://api.github.com/user?1735787045678"
		);
	}

	#[test]
	fn absolute_urls_keep_their_host() {
		assert_eq!(
			create_url("https://example.com/x", DEFAULT_API_URL, NOW),
			"https://example.com/x?1735787045678"
		);
		assert_eq!(
			create_url("https://example.com/x?page=2", DEFAULT_API_URL, NOW),
			"https://example.com/x?page=2&1735787045678"
		);
	}

	#[test]
	fn existing_query_on_relative_path_uses_ampersand() {
		assert_eq!(
			create_url("/repos/a/b/issues?state=open", "https://ghe.local/api/v3", NOW),
			"https://ghe.local/api/v3/repos/a/b/issues?state=open&1735787045678"
		);
	}

	#[test]
	fn millis_truncate_sub_millisecond_precision() {
		let at = macros::datetime!(1970-01-01 00:00:01.0019 UTC);

		assert_eq!(unix_millis(at), 1_001);
	}
}
