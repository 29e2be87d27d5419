use crate::schemas::timestamp;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `user-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename(deserialize = "userId"))]
    pub user_id: String,
    #[serde(rename(deserialize = "userName"))]
    pub user_name: String,
    #[serde(rename(deserialize = "userProfileId"))]
    pub user_profile_id: String,
    #[serde(rename(deserialize = "userEmail"))]
    pub user_email: String,
    #[serde(rename(deserialize = "isBloggerUser"))]
    pub is_blogger_user: bool,
    /// Signup time. The wire value is epoch seconds.
    #[serde(
        rename(deserialize = "signupTimeSec"),
        deserialize_with = "timestamp::epoch_seconds"
    )]
    pub signup_time: DateTime<Utc>,
    #[serde(rename(deserialize = "isMultiLoginEnabled"))]
    pub is_multi_login_enabled: bool,
}
