use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while resolving credentials, raised before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Missing Error: {variable} is not set {location}")]
    Missing {
        location: ErrorLocation,
        variable: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    Validation {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Env File Error: {path}: {reason} {location}")]
    EnvFile {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing(variable: impl Into<String>) -> Self {
        ConfigError::Missing {
            location: ErrorLocation::caller(),
            variable: variable.into(),
        }
    }

    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            location: ErrorLocation::caller(),
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn env_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ConfigError::EnvFile {
            location: ErrorLocation::caller(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}
