//! Optional observability helpers for option builds.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap each build in a `github_request.build` span carrying `method`,
//!   `auth`, and the final `outcome`, plus a warning whenever a basic credential pair is
//!   incomplete.
//! - Enable `metrics` to increment `github_request_options_total` (labels `auth`, `outcome`)
//!   for every build and `github_request_incomplete_credentials_total` (label `missing`) for
//!   every `undefined` fallback.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildOutcome {
	/// Options were produced with usable credentials.
	Success,
	/// Options were produced, but the authorization header carries an `undefined` part.
	Degraded,
	/// Strict validation rejected the config.
	Rejected,
}
impl BuildOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BuildOutcome::Success => "success",
			BuildOutcome::Degraded => "degraded",
			BuildOutcome::Rejected => "rejected",
		}
	}
}
impl Display for BuildOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
