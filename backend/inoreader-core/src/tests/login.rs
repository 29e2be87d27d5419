// Unit tests for ClientLogin response parsing

use crate::error::InoreaderClientError;
use crate::inoreader_client::extract_auth_token;

/// **VALUE**: Verifies the token is extracted from the documented response shape.
///
/// **WHY THIS MATTERS**: Every later request carries this token; a stray prefix
/// or newline produces 401s on all calls.
///
/// **BUG THIS CATCHES**: Would catch the prefix being kept or the newline left on.
#[test]
fn given_three_line_login_body_when_extracting_then_returns_token() {
    // GIVEN: The ClientLogin response body
    let body = "OK\nMoreInfo\nAuth=TOKEN123\n";

    // WHEN: Extracting the token
    let session = extract_auth_token(body).unwrap();

    // THEN: Exactly the token remains
    assert_eq!(session.api_key().expose(), "TOKEN123");
}

/// **VALUE**: Verifies the token is found regardless of line position.
///
/// **WHY THIS MATTERS**: Inoreader answers `SID=..\nLSID=..\nAuth=..` today; any
/// reordering must not silently yield a wrong token.
///
/// **BUG THIS CATCHES**: Would catch a return to positional indexing.
#[test]
fn given_reordered_lines_with_crlf_when_extracting_then_returns_token() {
    let body = "Auth=abc-def_123\r\nSID=unused\r\nLSID=unused\r\n";

    let session = extract_auth_token(body).unwrap();

    assert_eq!(session.api_key().expose(), "abc-def_123");
}

/// **VALUE**: Verifies a body without a token fails with its own error kind.
///
/// **WHY THIS MATTERS**: A short body used to panic with an index error.
///
/// **BUG THIS CATCHES**: Would catch an empty token being accepted.
#[test]
fn given_body_without_token_when_extracting_then_auth_token_missing() {
    for body in ["", "OK\nMoreInfo", "BadAuthentication", "SID=x\nAuth=\n"] {
        let result = extract_auth_token(body);
        assert!(
            matches!(result, Err(InoreaderClientError::AuthTokenMissing { .. })),
            "body {body:?} should have no token"
        );
    }
}

/// **VALUE**: Verifies the token is not printed by Debug.
///
/// **BUG THIS CATCHES**: Would catch Session deriving Debug over a plain String.
#[test]
fn given_session_when_debug_formatted_then_token_hidden() {
    let session = extract_auth_token("Auth=SECRET_TOKEN").unwrap();

    assert!(!format!("{:?}", session).contains("SECRET_TOKEN"));
}
