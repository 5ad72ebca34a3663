//! Credential models and the `authorization` header derived from them.

pub mod credentials;
pub mod header;
pub mod secret;

pub use credentials::*;
pub use header::*;
pub use secret::*;
