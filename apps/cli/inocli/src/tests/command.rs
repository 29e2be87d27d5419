// Unit tests for command line parsing

use crate::command::Command;
use crate::error::InocliError;

fn parse(args: &[&str]) -> Result<Command, InocliError> {
    Command::from_args(args.iter().map(|a| a.to_string()))
}

/// **VALUE**: Verifies every command name and the default.
///
/// **BUG THIS CATCHES**: Would catch a renamed command or a missing default.
#[test]
fn given_known_commands_when_parsed_then_variants_match() {
    assert_eq!(parse(&[]).unwrap(), Command::UserInfo);
    assert_eq!(parse(&["user-info"]).unwrap(), Command::UserInfo);
    assert_eq!(parse(&["subscriptions"]).unwrap(), Command::Subscriptions);
    assert_eq!(parse(&["tags"]).unwrap(), Command::Tags);
    assert_eq!(
        parse(&["content"]).unwrap(),
        Command::Content { stream_id: None }
    );
    assert_eq!(
        parse(&["content", "user/-/label/news"]).unwrap(),
        Command::Content {
            stream_id: Some("user/-/label/news".to_string())
        }
    );
}

/// **VALUE**: Verifies unknown commands and extra arguments are usage errors.
#[test]
fn given_bad_arguments_when_parsed_then_usage_error() {
    assert!(matches!(parse(&["starred"]), Err(InocliError::Usage { .. })));
    assert!(matches!(parse(&["tags", "extra"]), Err(InocliError::Usage { .. })));
    assert!(matches!(
        parse(&["content", "a", "b"]),
        Err(InocliError::Usage { .. })
    ));
}
