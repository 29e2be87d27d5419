//! Typed views of Inoreader JSON responses.
//!
//! Wire names are camelCase (a few are lowercase run-together, e.g. `sortid`);
//! record fields are snake_case. Renames apply to deserialization only, so a
//! record serializes back out with its Rust field names. Unknown wire fields
//! are ignored and optional fields decode to `None` when absent.

pub mod stream;
pub mod subscriptions;
pub mod tags;
pub mod timestamp;
pub mod user_info;

pub use stream::{Item, Link, Origin, StreamContents, Summary};
pub use subscriptions::{Category, Subscription, SubscriptionsList};
pub use tags::{TagInfo, TagKind, TagsList};
pub use user_info::UserInfo;

use crate::error::InoreaderClientError;

use serde::de::DeserializeOwned;

/// Decode a response body, reporting the JSON path of the failing field.
#[track_caller]
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, InoreaderClientError> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    Ok(serde_path_to_error::deserialize(deserializer)?)
}
