use crate::helpers::{
    LOGIN_BODY, TEST_APP_ID, TEST_APP_KEY, TEST_PASSWORD, TEST_TOKEN, endpoints, json_response,
    mount_login, test_config,
};

use inoreader_core::{Endpoints, InoreaderClient};
use inoreader_core::error::InoreaderClientError;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer};

/// **VALUE**: Verifies login sends credentials and the token ends up in every request.
///
/// **WHY THIS MATTERS**: This is the bootstrap every other call depends on.
///
/// **BUG THIS CATCHES**: Would catch a wrong Authorization format or missing
/// AppId/AppKey headers.
#[tokio::test]
async fn given_login_body_with_token_when_creating_then_requests_carry_auth_headers() {
    // GIVEN: A mock login and a user-info endpoint requiring the headers
    let server = MockServer::start().await;
    mount_login(&server, 200, LOGIN_BODY).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/user-info"))
        .and(header("Authorization", format!("GoogleLogin auth={TEST_TOKEN}").as_str()))
        .and(header("AppId", TEST_APP_ID))
        .and(header("AppKey", TEST_APP_KEY))
        .respond_with(json_response(
            r#"{"userId":"1","userName":"u","userProfileId":"1","userEmail":"reader@example.com",
                "isBloggerUser":false,"signupTimeSec":1700000000,"isMultiLoginEnabled":true}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Creating the client and querying
    let mut client = InoreaderClient::create_with_endpoints(&test_config(), endpoints(&server))
        .await
        .unwrap();
    let user = client.get_user_info().await.unwrap();

    // THEN: The authenticated call succeeded
    assert_eq!(user.user_email, "reader@example.com");
    assert!(user.is_multi_login_enabled);
    client.close().unwrap();
}

/// **VALUE**: Verifies a rejected login surfaces as a server error with the status.
///
/// **BUG THIS CATCHES**: Would catch the error body being parsed for a token.
#[tokio::test]
async fn given_rejected_login_when_creating_then_server_error_with_status() {
    let server = MockServer::start().await;
    mount_login(&server, 401, "Error=BadAuthentication\n").await;

    let result = InoreaderClient::create_with_endpoints(&test_config(), endpoints(&server)).await;

    match result {
        Err(err @ InoreaderClientError::Server { .. }) => {
            assert_eq!(err.status_code(), Some(401));
            assert!(err.to_string().contains("BadAuthentication"));
            assert!(!err.to_string().contains(TEST_PASSWORD));
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a successful login without a token line fails explicitly.
///
/// **BUG THIS CATCHES**: Would catch a client built around an empty or garbage token.
#[tokio::test]
async fn given_login_body_without_token_when_creating_then_auth_token_missing() {
    let server = MockServer::start().await;
    mount_login(&server, 200, "OK\n").await;

    let result = InoreaderClient::create_with_endpoints(&test_config(), endpoints(&server)).await;

    assert!(matches!(
        result,
        Err(InoreaderClientError::AuthTokenMissing { .. })
    ));
}

/// **VALUE**: Verifies transport failures during login propagate without the password.
///
/// **WHY THIS MATTERS**: The password travels in the query string; reqwest
/// errors normally embed the full URL.
///
/// **BUG THIS CATCHES**: Would catch `without_url()` being removed.
#[tokio::test]
async fn given_unreachable_login_host_when_creating_then_http_error_without_password() {
    // GIVEN: A closed local port
    let endpoints = Endpoints::from_host("http://127.0.0.1:1").unwrap();

    // WHEN: Logging in
    let result = InoreaderClient::create_with_endpoints(&test_config(), endpoints).await;

    // THEN: Http error, password not in message
    match result {
        Err(err @ InoreaderClientError::Http { .. }) => {
            assert!(!err.to_string().contains("s3cret"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}
