mod endpoints;
mod login;

pub use endpoints::{BASE_API_URL, Endpoints, LOGIN_URL};
pub use login::{Session, extract_auth_token};

use crate::config::InoreaderConfig;
use crate::error::InoreaderClientError;
use crate::schemas::{self, StreamContents, SubscriptionsList, TagsList, UserInfo};
use crate::tags::Tag;

use common::ErrorLocation;

use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

const USER_INFO_PATH: &str = "user-info";
const SUBSCRIPTION_LIST_PATH: &str = "subscription/list";
const TAG_LIST_PATH: &str = "tag/list";
const CONTENT_PATH: &str = "stream/contents";
const EDIT_TAG_PATH: &str = "edit-tag";

const APP_ID_HEADER: HeaderName = HeaderName::from_static("appid");
const APP_KEY_HEADER: HeaderName = HeaderName::from_static("appkey");

/// Maximum number of items returned by one `stream/contents` call.
pub const CONTENT_PAGE_SIZE: u32 = 100;
/// `r=o`: oldest items first.
const CONTENT_ORDER_OLDEST_FIRST: &str = "o";

/// Authenticated Inoreader API client.
///
/// Query methods take `&self` and may run concurrently; they share one
/// connection pool and the fixed auth headers. The pool is released by
/// [`close`](Self::close), or when the client is dropped.
#[derive(Debug)]
pub struct InoreaderClient {
    base_url: Url,
    client: Option<Client>,
}

impl InoreaderClient {
    /// Log in against the production endpoints and return a ready client.
    pub async fn create(config: &InoreaderConfig) -> Result<Self, InoreaderClientError> {
        Self::create_with_endpoints(config, Endpoints::inoreader()?).await
    }

    /// Log in against `endpoints` and return a ready client.
    ///
    /// # Errors
    ///
    /// Transport errors from the login call, [`InoreaderClientError::Server`]
    /// if the login is rejected, [`InoreaderClientError::AuthTokenMissing`] if
    /// the response carries no token.
    pub async fn create_with_endpoints(
        config: &InoreaderConfig,
        endpoints: Endpoints,
    ) -> Result<Self, InoreaderClientError> {
        let session = login::fetch_session(config, &endpoints).await?;
        Self::new(config, &session, endpoints)
    }

    /// Build a client around an already obtained session token.
    pub fn new(
        config: &InoreaderConfig,
        session: &Session,
        endpoints: Endpoints,
    ) -> Result<Self, InoreaderClientError> {
        let mut authorization = HeaderValue::from_str(&format!(
            "GoogleLogin auth={}",
            session.api_key().expose()
        ))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(APP_ID_HEADER, HeaderValue::from_str(config.app_id())?);
        headers.insert(APP_KEY_HEADER, HeaderValue::from_str(config.app_key())?);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: endpoints.base_api_url().clone(),
            client: Some(client),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    pub async fn get_user_info(&self) -> Result<UserInfo, InoreaderClientError> {
        let url = self.base_url.join(USER_INFO_PATH)?;
        self.get_json(url).await
    }

    pub async fn get_subscriptions(&self) -> Result<SubscriptionsList, InoreaderClientError> {
        let url = self.base_url.join(SUBSCRIPTION_LIST_PATH)?;
        self.get_json(url).await
    }

    /// All tags and folders, with unread counts where Inoreader provides them.
    pub async fn get_tags(&self) -> Result<TagsList, InoreaderClientError> {
        let mut url = self.base_url.join(TAG_LIST_PATH)?;
        url.query_pairs_mut()
            .append_pair("types", "1")
            .append_pair("count", "1");
        self.get_json(url).await
    }

    /// One page of up to [`CONTENT_PAGE_SIZE`] items, oldest first.
    ///
    /// # Arguments
    /// * `stream_id` - Stream to read (feed, folder, tag); the reading list when `None` or empty
    /// * `include` - Only items carrying all of these tags (`it`)
    /// * `exclude` - Skip items carrying any of these tags (`xt`)
    pub async fn get_content(
        &self,
        stream_id: Option<&str>,
        include: &[Tag],
        exclude: &[Tag],
    ) -> Result<StreamContents, InoreaderClientError> {
        let mut url = self.base_url.join(CONTENT_PATH)?;
        if let Some(stream_id) = stream_id.filter(|id| !id.is_empty()) {
            url.path_segments_mut()
                .map_err(|_| InoreaderClientError::UrlParse {
                    message: format!("{} cannot take path segments", self.base_url),
                    location: ErrorLocation::caller(),
                })?
                .push(stream_id);
        }

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("n", &CONTENT_PAGE_SIZE.to_string())
                .append_pair("r", CONTENT_ORDER_OLDEST_FIRST);
            for tag in include {
                query.append_pair("it", &tag.value());
            }
            for tag in exclude {
                query.append_pair("xt", &tag.value());
            }
        }

        self.get_json(url).await
    }

    /// Add and/or remove tags on items. Returns the raw response text (`OK`).
    ///
    /// # Errors
    ///
    /// Returns [`InoreaderClientError::Usage`] without sending anything if both
    /// `to_add` and `to_remove` are empty.
    pub async fn edit_tag<I: AsRef<str>>(
        &self,
        item_ids: &[I],
        to_add: &[Tag],
        to_remove: &[Tag],
    ) -> Result<String, InoreaderClientError> {
        if to_add.is_empty() && to_remove.is_empty() {
            return Err(InoreaderClientError::usage(
                "Either 'to_add' or 'to_remove' must be provided",
            ));
        }

        let mut url = self.base_url.join(EDIT_TAG_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            for tag in to_add {
                query.append_pair("a", &tag.value());
            }
            for tag in to_remove {
                query.append_pair("r", &tag.value());
            }
            for item_id in item_ids {
                query.append_pair("i", item_id.as_ref());
            }
        }

        let client = self.client()?;
        debug!("POST {} ({} items)", url.path(), item_ids.len());
        let response = client.post(url).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.text().await?)
    }

    /// Release the connection pool.
    ///
    /// Calling it again is a no-op. Queries after close fail with
    /// [`InoreaderClientError::ClientClosed`].
    pub fn close(&mut self) -> Result<(), InoreaderClientError> {
        match self.client.take() {
            Some(_) => info!("Inoreader client closed"),
            None => debug!("Inoreader client already closed"),
        }
        Ok(())
    }

    #[track_caller]
    fn client(&self) -> Result<&Client, InoreaderClientError> {
        match &self.client {
            Some(client) => Ok(client),
            None => Err(InoreaderClientError::client_closed()),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, InoreaderClientError> {
        let client = self.client()?;
        debug!("GET {}", url.path());

        let response = client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;

        schemas::decode(&body)
    }

    async fn check_status(response: Response) -> Result<Response, InoreaderClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        warn!("{} answered HTTP {}", path, status.as_u16());
        let message = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read error body from {}: {}", path, e);
                String::new()
            }
        };
        Err(InoreaderClientError::server(status.as_u16(), message))
    }
}
