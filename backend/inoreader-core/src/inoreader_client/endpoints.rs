use crate::error::InoreaderClientError;

use const_format::concatcp;
use url::Url;

pub const INOREADER_HOST_URL: &str = "https://www.inoreader.com";
pub const BASE_API_PATH: &str = "/reader/api/0/";
pub const LOGIN_PATH: &str = "/accounts/ClientLogin";
pub const BASE_API_URL: &str = concatcp!(INOREADER_HOST_URL, BASE_API_PATH);
pub const LOGIN_URL: &str = concatcp!(INOREADER_HOST_URL, LOGIN_PATH);

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    login_url: Url,
    base_api_url: Url,
}

impl Endpoints {
    /// The production Inoreader endpoints.
    pub fn inoreader() -> Result<Self, InoreaderClientError> {
        Self::new(LOGIN_URL, BASE_API_URL)
    }

    /// Endpoints on another host with the Inoreader path layout, e.g. a mock server.
    pub fn from_host(host: &str) -> Result<Self, InoreaderClientError> {
        let host = host.trim_end_matches('/');
        Self::new(
            &format!("{host}{LOGIN_PATH}"),
            &format!("{host}{BASE_API_PATH}"),
        )
    }

    /// Explicit endpoints. A missing trailing slash on the API base is added,
    /// otherwise relative joins would replace its last segment.
    pub fn new(login_url: &str, base_api_url: &str) -> Result<Self, InoreaderClientError> {
        let login_url = Url::parse(login_url)?;
        let mut base_api_url = Url::parse(base_api_url)?;
        if !base_api_url.path().ends_with('/') {
            let path = format!("{}/", base_api_url.path());
            base_api_url.set_path(&path);
        }

        Ok(Self {
            login_url,
            base_api_url,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    pub fn base_api_url(&self) -> &Url {
        &self.base_api_url
    }
}
