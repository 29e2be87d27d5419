//! Command selection and execution.
//!
//! `inocli [user-info|subscriptions|tags|content [stream_id]]`, defaulting to
//! `user-info`. Each command prints the decoded record as pretty JSON.

use crate::error::InocliError;

use inoreader_core::InoreaderClient;

use log::debug;
use serde::Serialize;

pub const USAGE: &str = "usage: inocli [user-info|subscriptions|tags|content [stream_id]]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    UserInfo,
    Subscriptions,
    Tags,
    Content { stream_id: Option<String> },
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Self, InocliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            None | Some("user-info") => Command::UserInfo,
            Some("subscriptions") => Command::Subscriptions,
            Some("tags") => Command::Tags,
            Some("content") => Command::Content {
                stream_id: args.next(),
            },
            Some(other) => {
                return Err(InocliError::usage(format!("unknown command '{other}'; {USAGE}")));
            }
        };

        if let Some(extra) = args.next() {
            return Err(InocliError::usage(format!("unexpected argument '{extra}'; {USAGE}")));
        }

        Ok(command)
    }

    /// Run the command and render its result as pretty JSON.
    pub async fn execute(&self, client: &InoreaderClient) -> Result<String, InocliError> {
        debug!("Executing {:?}", self);
        match self {
            Command::UserInfo => render(&client.get_user_info().await?),
            Command::Subscriptions => render(&client.get_subscriptions().await?),
            Command::Tags => render(&client.get_tags().await?),
            Command::Content { stream_id } => {
                render(&client.get_content(stream_id.as_deref(), &[], &[]).await?)
            }
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, InocliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| InocliError::inocli(format!("Failed to render output: {e}")))
}
