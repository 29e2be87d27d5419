//! Tag references used by stream filters and tag edits.

use std::fmt;
use std::str::FromStr;

use const_format::concatcp;

const STATE_PREFIX: &str = "user/-/state/com.google/";
const LABEL_PREFIX: &str = "user/-/label/";

/// Built-in Inoreader state tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemTag {
    Read,
    Starred,
    Liked,
    Broadcast,
    Annotated,
    SavedWebPages,
}

impl SystemTag {
    pub const ALL: [SystemTag; 6] = [
        SystemTag::Read,
        SystemTag::Starred,
        SystemTag::Liked,
        SystemTag::Broadcast,
        SystemTag::Annotated,
        SystemTag::SavedWebPages,
    ];

    pub const fn value(&self) -> &'static str {
        match self {
            SystemTag::Read => concatcp!(STATE_PREFIX, "read"),
            SystemTag::Starred => concatcp!(STATE_PREFIX, "starred"),
            SystemTag::Liked => concatcp!(STATE_PREFIX, "like"),
            SystemTag::Broadcast => concatcp!(STATE_PREFIX, "broadcast"),
            SystemTag::Annotated => concatcp!(STATE_PREFIX, "annotated"),
            SystemTag::SavedWebPages => concatcp!(STATE_PREFIX, "saved-web-pages"),
        }
    }
}

impl fmt::Display for SystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A system state tag or a user label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    System(SystemTag),
    /// Label name, rendered as `user/-/label/<name>`.
    Custom(String),
}

impl Tag {
    pub fn custom(name: impl Into<String>) -> Self {
        Tag::Custom(name.into())
    }

    /// The stream id Inoreader expects in `it`, `xt`, `a` and `r` parameters.
    pub fn value(&self) -> String {
        match self {
            Tag::System(tag) => tag.value().to_string(),
            Tag::Custom(name) => format!("{LABEL_PREFIX}{name}"),
        }
    }
}

impl From<SystemTag> for Tag {
    fn from(tag: SystemTag) -> Self {
        Tag::System(tag)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::System(tag) => f.write_str(tag.value()),
            Tag::Custom(name) => write!(f, "{LABEL_PREFIX}{name}"),
        }
    }
}

/// Parses a rendered tag stream id back into a [`Tag`].
impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(tag) = SystemTag::ALL.iter().find(|tag| tag.value() == s) {
            return Ok(Tag::System(*tag));
        }

        match s.strip_prefix(LABEL_PREFIX) {
            Some(name) if !name.is_empty() => Ok(Tag::Custom(name.to_string())),
            _ => Err(format!("'{s}' is not a state tag or label stream id")),
        }
    }
}
