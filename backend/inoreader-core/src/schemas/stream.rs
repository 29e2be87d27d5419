use crate::schemas::timestamp;
use crate::tags::Tag;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: Url,
    #[serde(default, rename(deserialize = "type"))]
    pub kind: Option<String>,
}

impl Link {
    /// The href without query string and fragment.
    ///
    /// Feed links often carry tracking parameters; this is the stable form.
    pub fn url(&self) -> Url {
        let mut url = self.href.clone();
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub direction: String,
    pub content: String,
}

/// The feed an item came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(rename(deserialize = "streamId"))]
    pub stream_id: String,
    pub title: String,
    #[serde(rename(deserialize = "htmlUrl"))]
    pub html_url: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Milliseconds since epoch, as sent.
    #[serde(rename(deserialize = "crawlTimeMsec"))]
    pub crawl_time_msec: String,
    /// Microseconds since epoch, as sent.
    #[serde(rename(deserialize = "timestampUsec"))]
    pub timestamp_usec: String,
    pub id: String,
    pub categories: Vec<String>,
    pub title: String,
    #[serde(deserialize_with = "timestamp::epoch_seconds")]
    pub published: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::epoch_seconds")]
    pub updated: DateTime<Utc>,
    pub canonical: Vec<Link>,
    pub alternate: Vec<Link>,
    pub summary: Summary,
    pub author: String,
    #[serde(rename(deserialize = "likingUsers"))]
    pub liking_users: Vec<Value>,
    pub comments: Vec<Value>,
    #[serde(rename(deserialize = "commentsNum"), deserialize_with = "timestamp::lenient_i64")]
    pub comments_num: i64,
    pub annotations: Vec<Value>,
    pub origin: Origin,
    pub summaries: Vec<Value>,
}

impl Item {
    pub fn crawl_time(&self) -> Option<DateTime<Utc>> {
        timestamp::parse_epoch_millis(&self.crawl_time_msec)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        timestamp::parse_epoch_micros(&self.timestamp_usec)
    }

    /// Whether the item carries the tag.
    ///
    /// Categories name the real user id (`user/1005921515/label/news`) where
    /// tags use `-`, so only the part after the user segment is compared.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        let wanted = tag.value();
        let wanted = without_user_segment(&wanted);
        self.categories
            .iter()
            .any(|category| without_user_segment(category) == wanted)
    }
}

fn without_user_segment(stream_id: &str) -> &str {
    stream_id
        .strip_prefix("user/")
        .and_then(|rest| rest.split_once('/'))
        .map_or(stream_id, |(_, tail)| tail)
}

/// Response of `stream/contents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamContents {
    pub direction: String,
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename(deserialize = "self"))]
    pub self_link: Link,
    #[serde(deserialize_with = "timestamp::epoch_seconds")]
    pub updated: DateTime<Utc>,
    /// Microseconds since epoch, as sent.
    #[serde(rename(deserialize = "updatedUsec"))]
    pub updated_usec: String,
    pub items: Vec<Item>,
}

impl StreamContents {
    /// `updated` with the microsecond precision of `updatedUsec`.
    pub fn updated_precise(&self) -> Option<DateTime<Utc>> {
        timestamp::parse_epoch_micros(&self.updated_usec)
    }
}
