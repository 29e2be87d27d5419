//! Test helpers for client integration tests.
//!
//! - Credentials that pass validation
//! - Mounting a ClientLogin mock
//! - Building a logged-in client against a mock server

use inoreader_core::{Endpoints, InoreaderClient, InoreaderConfig};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "G2UlCa3dkn1UPTjRZsxaNeh47Ly4JSVK";
pub const TEST_APP_ID: &str = "1000001234";
pub const TEST_APP_KEY: &str = "abcdefABCDEF1234";
pub const TEST_EMAIL: &str = "reader@example.com";
pub const TEST_PASSWORD: &str = "s3cret & more";

pub const LOGIN_BODY: &str = "SID=null\nLSID=null\nAuth=G2UlCa3dkn1UPTjRZsxaNeh47Ly4JSVK\n";

pub fn test_config() -> InoreaderConfig {
    InoreaderConfig::new(TEST_APP_ID, TEST_APP_KEY, TEST_EMAIL, TEST_PASSWORD)
        .expect("test credentials are valid")
}

pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints::from_host(&server.uri()).expect("mock server uri is valid")
}

/// Mount a ClientLogin mock answering with `body` and `status`.
pub async fn mount_login(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/accounts/ClientLogin"))
        .and(query_param("Email", TEST_EMAIL))
        .and(query_param("Passwd", TEST_PASSWORD))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Log in against the mock server and return a ready client.
pub async fn logged_in_client(server: &MockServer) -> InoreaderClient {
    mount_login(server, 200, LOGIN_BODY).await;
    InoreaderClient::create_with_endpoints(&test_config(), endpoints(server))
        .await
        .expect("login against mock server should succeed")
}

pub fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}
