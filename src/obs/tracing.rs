// self
use crate::{
	auth::AuthKind,
	obs::{self, BuildOutcome},
};

/// Instrumentation for a single option build.
///
/// Enters a `github_request.build` span on [`start`](Self::start); [`finish`](Self::finish)
/// stamps the outcome on that span and feeds the build counter.
#[derive(Debug)]
pub struct BuildTrace {
	auth: AuthKind,
	#[cfg(feature = "tracing")]
	span: tracing::span::EnteredSpan,
}
impl BuildTrace {
	/// Opens the span for a build using `method` under the `auth` scheme.
	pub fn start(method: &str, auth: AuthKind) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!(
				"github_request.build",
				method,
				auth = auth.as_str(),
				outcome = tracing::field::Empty
			)
			.entered();

			Self { auth, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = method;

			Self { auth }
		}
	}

	/// Records `outcome` and closes the span.
	pub fn finish(self, outcome: BuildOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if outcome == BuildOutcome::Rejected {
				tracing::debug!("Strict build rejected the config.");
			}
		}

		obs::record_build(self.auth, outcome);
	}
}

/// Warns that a basic credential pair is missing a part and will render as `undefined`.
pub fn warn_incomplete_credentials(has_username: bool, has_password: bool) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			has_username,
			has_password,
			"Building a basic authorization header without a complete username and password."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (has_username, has_password);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn build_trace_finishes_for_every_outcome() {
		for outcome in [BuildOutcome::Success, BuildOutcome::Degraded, BuildOutcome::Rejected] {
			BuildTrace::start("PUT", AuthKind::Basic).finish(outcome);
		}

		warn_incomplete_credentials(false, true);
	}
}
