// self
use crate::{auth::AuthKind, obs::BuildOutcome};

/// Counts one build via the global metrics recorder (when enabled).
pub fn record_build(auth: AuthKind, outcome: BuildOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"github_request_options_total",
			"auth" => auth.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (auth, outcome);
	}
}

/// Counts one basic header rendered with an `undefined` part.
pub fn record_incomplete_credentials(has_username: bool, has_password: bool) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"github_request_incomplete_credentials_total",
			"missing" => missing_label(has_username, has_password)
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (has_username, has_password);
	}
}

#[cfg_attr(not(feature = "metrics"), allow(dead_code))]
fn missing_label(has_username: bool, has_password: bool) -> &'static str {
	match (has_username, has_password) {
		(false, false) => "both",
		(false, true) => "username",
		(true, false) => "password",
		(true, true) => "none",
	}
}
