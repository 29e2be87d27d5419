pub mod config;
pub mod inoreader_client;

pub use config::ConfigError;
pub use inoreader_client::InoreaderClientError;

use thiserror::Error;

/// Any failure surfaced by this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] InoreaderClientError),
}
