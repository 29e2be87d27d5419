//! ClientLogin exchange.
//!
//! The login endpoint answers with `Key=Value` lines, one of which is
//! `Auth=<token>`. The token is located by prefix, never by line position.

use crate::config::InoreaderConfig;
use crate::error::InoreaderClientError;
use crate::inoreader_client::Endpoints;

use common::RedactedSecret;

use log::{debug, info, warn};
use reqwest::Client;

const AUTH_LINE_PREFIX: &str = "Auth=";

/// Session token obtained from the login exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    api_key: RedactedSecret,
}

impl Session {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: RedactedSecret::new(api_key),
        }
    }

    pub fn api_key(&self) -> &RedactedSecret {
        &self.api_key
    }
}

/// Extract the token from a ClientLogin response body.
///
/// # Errors
///
/// Returns [`InoreaderClientError::AuthTokenMissing`] if no line starts with
/// `Auth=` or the token after it is empty.
#[track_caller]
pub fn extract_auth_token(body: &str) -> Result<Session, InoreaderClientError> {
    let token = body
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(AUTH_LINE_PREFIX))
        .filter(|token| !token.is_empty());

    match token {
        Some(token) => Ok(Session::new(token)),
        None => Err(InoreaderClientError::auth_token_missing()),
    }
}

/// Perform the login exchange on a short-lived, unauthenticated client.
///
/// The login client is dropped when this function returns, on success and on
/// every error path.
pub(crate) async fn fetch_session(
    config: &InoreaderConfig,
    endpoints: &Endpoints,
) -> Result<Session, InoreaderClientError> {
    let login_client = Client::builder().build()?;

    let mut url = endpoints.login_url().clone();
    url.query_pairs_mut()
        .append_pair("Email", config.email())
        .append_pair("Passwd", config.password().expose());

    debug!("GET {} for {}", endpoints.login_url(), config.email());

    // The password is in the query string; keep the URL out of error messages.
    let response = login_client
        .get(url)
        .send()
        .await
        .map_err(|e| InoreaderClientError::from(e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| InoreaderClientError::from(e.without_url()))?;

    if !status.is_success() {
        warn!("Login rejected for {}: HTTP {}", config.email(), status.as_u16());
        return Err(InoreaderClientError::server(status.as_u16(), body.trim()));
    }

    let session = extract_auth_token(&body)?;
    info!(
        "Logged in as {} (token {} chars)",
        config.email(),
        session.api_key().len()
    );
    Ok(session)
}
