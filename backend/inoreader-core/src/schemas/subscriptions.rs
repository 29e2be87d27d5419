use crate::schemas::timestamp;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    #[serde(rename(deserialize = "feedType"))]
    pub feed_type: String,
    pub title: String,
    pub categories: Vec<Category>,
    #[serde(rename(deserialize = "sortid"))]
    pub sort_id: String,
    /// Milliseconds since epoch of the oldest item Inoreader holds for the feed.
    #[serde(
        rename(deserialize = "firstitemmsec"),
        deserialize_with = "timestamp::lenient_i64"
    )]
    pub first_item_msec: i64,
    pub url: String,
    #[serde(rename(deserialize = "htmlUrl"))]
    pub html_url: String,
    #[serde(rename(deserialize = "iconUrl"))]
    pub icon_url: String,
}

/// Response of `subscription/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionsList {
    pub subscriptions: Vec<Subscription>,
}
