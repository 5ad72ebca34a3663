//! Build ready-to-send GitHub REST API request options (URL, method, headers, authorization)
//! from a minimal config, without touching the network.
//!
//! ```
//! use github_request_defaults::{config::Config, options::defaults};
//!
//! let build = defaults(Config::builder().token("XYZ").build());
//! let opts = build(Some("GET"), "/repos/foo/bar", None);
//!
//! assert_eq!(opts.headers.get("authorization"), Some("token XYZ"));
//! assert!(opts.path.starts_with("https://api.github.com/repos/foo/bar?"));
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
#[cfg(feature = "reqwest")] pub mod http;
pub mod obs;
pub mod options;
pub mod props;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
