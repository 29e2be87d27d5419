use common::ErrorLocation;

use inoreader_core::error::{ConfigError, CoreError, InoreaderClientError};

use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum InocliError {
    /// Error from this app (logging, output)
    #[error("Inocli Error: {message} {location}")]
    Inocli {
        message: String,
        location: ErrorLocation,
    },

    /// Bad command line arguments
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    /// Error from inoreader-core (config, login, queries)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl InocliError {
    #[track_caller]
    pub fn inocli(message: impl Into<String>) -> Self {
        InocliError::Inocli {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        InocliError::Usage {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Short category name printed ahead of the message.
    pub fn category(&self) -> &'static str {
        match self {
            InocliError::Inocli { .. } => "inocli",
            InocliError::Usage { .. } => "usage",
            InocliError::Core(CoreError::Config(_)) => "config",
            InocliError::Core(CoreError::Client(error)) => error.error_category(),
        }
    }
}

impl From<ConfigError> for InocliError {
    fn from(error: ConfigError) -> Self {
        InocliError::Core(CoreError::Config(error))
    }
}

impl From<InoreaderClientError> for InocliError {
    fn from(error: InoreaderClientError) -> Self {
        InocliError::Core(CoreError::Client(error))
    }
}
