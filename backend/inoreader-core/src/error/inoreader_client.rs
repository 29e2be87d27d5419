//! Error types for the Inoreader API client.
//!
//! - Transport errors are propagated from reqwest, never retried
//! - HTTP status codes are stored directly, not parsed from strings
//! - Decode errors carry the JSON path of the offending field

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InoreaderClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error at '{path}': {message} {location}")]
    Decode {
        path: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth Token Missing Error: login response has no Auth= line {location}")]
    AuthTokenMissing { location: ErrorLocation },

    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Client Closed Error: the connection was released by close() {location}")]
    ClientClosed { location: ErrorLocation },
}

impl InoreaderClientError {
    #[track_caller]
    pub fn server(status_code: u16, message: impl Into<String>) -> Self {
        InoreaderClientError::Server {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        InoreaderClientError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_token_missing() -> Self {
        InoreaderClientError::AuthTokenMissing {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn client_closed() -> Self {
        InoreaderClientError::ClientClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get HTTP status code if the server answered with a failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            InoreaderClientError::Server { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    /// Short category name; inocli prints it ahead of the error message.
    pub fn error_category(&self) -> &'static str {
        match self {
            InoreaderClientError::Http { is_timeout: true, .. } => "timeout",
            InoreaderClientError::Http { is_connection: true, .. } => "connection",
            InoreaderClientError::Http { .. } => "transport",
            InoreaderClientError::UrlParse { .. } => "url",
            InoreaderClientError::Header { .. } => "header",
            InoreaderClientError::Server { status_code, .. } if status_code.is_auth_failure() => {
                "unauthorized"
            }
            InoreaderClientError::Server { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            InoreaderClientError::Server { .. } => "client_error",
            InoreaderClientError::Decode { .. } => "decode",
            InoreaderClientError::AuthTokenMissing { .. } => "auth_token_missing",
            InoreaderClientError::Usage { .. } => "usage",
            InoreaderClientError::ClientClosed { .. } => "closed",
        }
    }
}

impl From<url::ParseError> for InoreaderClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        InoreaderClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for InoreaderClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        InoreaderClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for InoreaderClientError {
    #[track_caller]
    fn from(error: reqwest::header::InvalidHeaderValue) -> Self {
        InoreaderClientError::Header {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for InoreaderClientError {
    #[track_caller]
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        InoreaderClientError::Decode {
            path: error.path().to_string(),
            message: error.into_inner().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
