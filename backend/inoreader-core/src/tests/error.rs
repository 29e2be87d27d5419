// Unit tests for error formatting and categorization

use crate::error::{ConfigError, CoreError, InoreaderClientError};

/// **VALUE**: Verifies errors carry the call-site location in their message.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` missing on a constructor,
/// which makes every error point into the error module.
#[test]
fn given_error_constructors_when_formatted_then_location_is_call_site() {
    let usage = InoreaderClientError::usage("nothing to do");
    let missing = ConfigError::missing("INOREADER_EMAIL");

    let usage_text = usage.to_string();
    let missing_text = missing.to_string();

    assert!(usage_text.contains("Usage Error: nothing to do"));
    assert!(usage_text.contains("tests/error.rs"), "got: {usage_text}");
    assert!(missing_text.contains("INOREADER_EMAIL is not set"));
    assert!(missing_text.contains("tests/error.rs"), "got: {missing_text}");
}

/// **VALUE**: Verifies server errors expose their status and category.
///
/// **WHY THIS MATTERS**: The CLI reports a rejected login differently from an outage.
#[test]
fn given_server_errors_when_categorized_then_status_drives_category() {
    let unauthorized = InoreaderClientError::server(401, "AppId required");
    let outage = InoreaderClientError::server(503, "");
    let not_found = InoreaderClientError::server(404, "");

    assert_eq!(unauthorized.status_code(), Some(401));
    assert_eq!(unauthorized.error_category(), "unauthorized");
    assert_eq!(outage.error_category(), "server_error");
    assert_eq!(not_found.error_category(), "client_error");
    assert_eq!(InoreaderClientError::client_closed().status_code(), None);
    assert_eq!(InoreaderClientError::client_closed().error_category(), "closed");
}

/// **VALUE**: Verifies both error families convert into `CoreError` transparently.
#[test]
fn given_config_and_client_errors_when_converted_then_message_preserved() {
    let config: CoreError = ConfigError::validation("bad email").into();
    let client: CoreError = InoreaderClientError::auth_token_missing().into();

    assert!(config.to_string().starts_with("Config Validation Error: bad email"));
    assert!(client.to_string().starts_with("Auth Token Missing Error"));
}
