//! Shared primitives for the Inoreader workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, secret handling, status codes
//! - **inoreader-core**: credential resolution, API client, response model
//! - **inocli**: command line wiring
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
