//! Client library for the Inoreader reader API.
//!
//! ```no_run
//! # async fn run() -> Result<(), inoreader_core::error::CoreError> {
//! use inoreader_core::{InoreaderClient, InoreaderConfig, SystemTag, Tag};
//!
//! let config = InoreaderConfig::load()?;
//! let mut client = InoreaderClient::create(&config).await?;
//! let unread = client
//!     .get_content(None, &[], &[Tag::from(SystemTag::Read)])
//!     .await?;
//! println!("{} unread items", unread.items.len());
//! client.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod inoreader_client;
pub mod schemas;
pub mod tags;

#[cfg(test)]
mod tests;

pub use config::InoreaderConfig;
pub use inoreader_client::{Endpoints, InoreaderClient, Session};
pub use tags::{SystemTag, Tag};
