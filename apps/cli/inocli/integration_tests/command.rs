use inocli::command::Command;

use inoreader_core::{Endpoints, InoreaderClient, InoreaderConfig, Session};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TAGS_JSON: &str = r#"{"tags":[
    {"id":"user/1005921515/state/com.google/starred","sortid":"FFFFFFFF"},
    {"id":"user/1005921515/label/news","sortid":"BE4B3A01","unreadCount":4}
]}"#;

fn client_for(server: &MockServer) -> InoreaderClient {
    let config = InoreaderConfig::new("1000001234", "app-key", "reader@example.com", "password")
        .unwrap();
    let endpoints = Endpoints::from_host(&server.uri()).unwrap();
    InoreaderClient::new(&config, &Session::new("TOKEN123"), endpoints).unwrap()
}

/// **VALUE**: Tests that a command runs against the client and renders canonical field names.
///
/// **WHY THIS MATTERS**: This is the closest we get to an end-to-end run without
/// real credentials: parsed command, real client, mocked API, rendered output.
///
/// **BUG THIS CATCHES**: Would catch output using wire names (`unreadCount`) or
/// dropping `null` for absent counts.
#[tokio::test]
async fn given_tags_command_when_executed_then_renders_snake_case_json() {
    // GIVEN: A client built from an existing session, and a tag list mock
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .and(header("Authorization", "GoogleLogin auth=TOKEN123"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TAGS_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let mut client = client_for(&server);

    // WHEN: Executing the tags command
    let command = Command::from_args(["tags".to_string()]).unwrap();
    let output = command.execute(&client).await.unwrap();
    client.close().unwrap();

    // THEN: Output is JSON with record field names
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["tags"][1]["unread_count"], 4);
    assert!(value["tags"][0]["unread_count"].is_null());
    assert!(value["tags"][0].get("unreadCount").is_none());
}

/// **VALUE**: Tests that API failures surface as command errors.
#[tokio::test]
async fn given_unauthorized_api_when_executed_then_error_mentions_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/user-info"))
        .respond_with(ResponseTemplate::new(401).set_body_string("AppId required"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = Command::UserInfo.execute(&client).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("HTTP 401"), "got: {err}");
}
