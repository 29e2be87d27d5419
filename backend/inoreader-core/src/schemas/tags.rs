use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Tag,
    Folder,
    ActiveSearch,
}

/// One entry of `tag/list`. Counts are only sent for some tag kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub id: String,
    #[serde(rename(deserialize = "sortid"))]
    pub sort_id: String,
    #[serde(default, rename(deserialize = "unreadCount"))]
    pub unread_count: Option<u64>,
    #[serde(default, rename(deserialize = "unseenCount"))]
    pub unseen_count: Option<u64>,
    #[serde(default, rename(deserialize = "type"))]
    pub kind: Option<TagKind>,
    #[serde(default)]
    pub pinned: Option<i64>,
    #[serde(default, rename(deserialize = "articleCount"))]
    pub article_count: Option<u64>,
    #[serde(default, rename(deserialize = "articleCountToday"))]
    pub article_count_today: Option<u64>,
}

/// Response of `tag/list?types=1&count=1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsList {
    pub tags: Vec<TagInfo>,
}
