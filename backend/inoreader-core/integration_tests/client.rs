use crate::helpers::{TEST_TOKEN, json_response, logged_in_client, test_config};

use inoreader_core::error::InoreaderClientError;
use inoreader_core::{Endpoints, InoreaderClient, Session, SystemTag, Tag};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use wiremock::matchers::{method, path, path_regex, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_INFO_JSON: &str = r#"{
    "userId": "1005921515", "userName": "Jacket", "userProfileId": "1005921515",
    "userEmail": "reader@example.com", "isBloggerUser": false,
    "signupTimeSec": "1163850082", "isMultiLoginEnabled": false
}"#;

const TAGS_JSON: &str = r#"{
    "tags": [
        { "id": "user/1005921515/state/com.google/starred", "sortid": "FFFFFFFF" },
        { "id": "user/1005921515/label/news", "sortid": "BE4B3A01", "unreadCount": 12, "type": "tag" }
    ]
}"#;

const SUBSCRIPTIONS_JSON: &str = r#"{
    "subscriptions": [{
        "id": "feed/https://blog.example.com/feed", "feedType": "rss", "title": "Example Blog",
        "categories": [{ "id": "user/1005921515/label/news", "label": "news" }],
        "sortid": "00DA6134", "firstitemmsec": 1424501744931,
        "url": "https://blog.example.com/feed", "htmlUrl": "https://blog.example.com/",
        "iconUrl": "https://blog.example.com/favicon.ico"
    }]
}"#;

const TRUNCATED_ERROR_RESPONSE: &[u8] =
    b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial";

const STREAM_CONTENTS_JSON: &str = r#"{
    "direction": "ltr",
    "id": "user/-/label/news",
    "title": "news",
    "description": "",
    "self": { "href": "https://www.inoreader.com/reader/api/0/stream/contents/user/-/label/news" },
    "updated": 1700000100,
    "updatedUsec": "1700000100000000",
    "items": [{
        "crawlTimeMsec": "1700000000123", "timestampUsec": "1700000000123456",
        "id": "tag:google.com,2005:reader/item/00000000148b9369",
        "categories": ["user/1005921515/label/news"],
        "title": "Hello", "published": "1700000000", "updated": 1700000000,
        "canonical": [{ "href": "https://blog.example.com/hello" }],
        "alternate": [{ "href": "https://blog.example.com/hello", "type": "text/html" }],
        "summary": { "direction": "ltr", "content": "hi" },
        "author": "Ferris", "likingUsers": [], "comments": [], "commentsNum": 0,
        "annotations": [],
        "origin": { "streamId": "feed/https://blog.example.com/feed", "title": "Example Blog",
                    "htmlUrl": "https://blog.example.com/" },
        "summaries": []
    }]
}"#;

/// **VALUE**: Verifies subscriptions are fetched and decoded.
#[tokio::test]
async fn given_subscription_list_when_fetched_then_decoded_with_categories() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/subscription/list"))
        .respond_with(json_response(SUBSCRIPTIONS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.get_subscriptions().await.unwrap();

    assert_eq!(list.subscriptions.len(), 1);
    assert_eq!(list.subscriptions[0].categories[0].label, "news");
}

/// **VALUE**: Verifies `tag/list` is called with `types=1&count=1`.
///
/// **WHY THIS MATTERS**: Without these parameters Inoreader omits folder types
/// and unread counts.
///
/// **BUG THIS CATCHES**: Would catch the fixed query being dropped.
#[tokio::test]
async fn given_tag_list_when_fetched_then_counts_requested_and_optional() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .and(query_param("types", "1"))
        .and(query_param("count", "1"))
        .respond_with(json_response(TAGS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client.get_tags().await.unwrap();

    assert_eq!(tags.tags[0].unread_count, None);
    assert_eq!(tags.tags[1].unread_count, Some(12));
}

/// **VALUE**: Verifies the reading list query without tag filters.
///
/// **BUG THIS CATCHES**: Would catch empty `it`/`xt` parameters being sent.
#[tokio::test]
async fn given_no_stream_and_no_tags_when_fetching_content_then_only_paging_params() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/stream/contents"))
        .and(query_param("n", "100"))
        .and(query_param("r", "o"))
        .and(query_param_is_missing("it"))
        .and(query_param_is_missing("xt"))
        .respond_with(json_response(STREAM_CONTENTS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let contents = client.get_content(None, &[], &[]).await.unwrap();

    assert_eq!(contents.items.len(), 1);
    assert_eq!(contents.items[0].published.timestamp(), 1_700_000_000);
}

/// **VALUE**: Verifies stream id in the path and tag filters in the query.
///
/// **WHY THIS MATTERS**: Filters are how callers ask for "unread in folder X".
///
/// **BUG THIS CATCHES**: Would catch tags rendered with Debug instead of their value,
/// or the stream id being dropped.
#[tokio::test]
async fn given_stream_and_tag_filters_when_fetching_content_then_sent_in_path_and_query() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/reader/api/0/stream/contents/.*label.*news$"))
        .and(query_param("n", "100"))
        .and(query_param("it", "user/-/state/com.google/starred"))
        .and(query_param("it", "user/-/label/news"))
        .and(query_param("xt", "user/-/state/com.google/read"))
        .respond_with(json_response(STREAM_CONTENTS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let contents = client
        .get_content(
            Some("user/-/label/news"),
            &[SystemTag::Starred.into(), Tag::custom("news")],
            &[SystemTag::Read.into()],
        )
        .await
        .unwrap();

    assert!(contents.items[0].has_tag(&Tag::custom("news")));
}

/// **VALUE**: Verifies an empty stream id reads the reading list.
///
/// **WHY THIS MATTERS**: `inocli content ""` passes the empty id straight through.
///
/// **BUG THIS CATCHES**: Would catch an empty path segment turning the request
/// into `stream/contents/`.
#[tokio::test]
async fn given_empty_stream_id_when_fetching_content_then_reading_list_requested() {
    // GIVEN: Only the bare reading list path answers
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/stream/contents"))
        .respond_with(json_response(STREAM_CONTENTS_JSON))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching with an empty stream id
    let contents = client.get_content(Some(""), &[], &[]).await.unwrap();

    // THEN: The reading list was served
    assert_eq!(contents.items.len(), 1);
    let requests = server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    assert_eq!(last.url.path(), "/reader/api/0/stream/contents");
}

/// **VALUE**: Verifies an error response whose body cannot be read still
/// surfaces as a Server error with its status.
///
/// **WHY THIS MATTERS**: The status is what callers branch on; a broken body
/// must not turn it into a transport error.
///
/// **BUG THIS CATCHES**: Would catch the body read failure replacing the
/// status error.
#[tokio::test]
async fn given_error_body_cut_short_when_fetching_then_server_error_with_empty_message() {
    // GIVEN: A server that promises 100 body bytes and closes after 7
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket.write_all(TRUNCATED_ERROR_RESPONSE).await.unwrap();
        let _ = socket.shutdown().await;
    });
    let endpoints = Endpoints::from_host(&format!("http://{address}")).unwrap();
    let client =
        InoreaderClient::new(&test_config(), &Session::new(TEST_TOKEN), endpoints).unwrap();

    // WHEN: Fetching tags
    let result = client.get_tags().await;

    // THEN: Server error with the status and no message
    match result {
        Err(err @ InoreaderClientError::Server { .. }) => {
            assert_eq!(err.status_code(), Some(500));
            if let InoreaderClientError::Server { message, .. } = err {
                assert!(message.is_empty(), "got message: {message}");
            }
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies `edit_tag` with no tags fails before any request is sent.
///
/// **WHY THIS MATTERS**: Inoreader would accept the call and do nothing, hiding
/// the caller's mistake.
///
/// **BUG THIS CATCHES**: Would catch the check moving after the request.
#[tokio::test]
async fn given_no_tags_when_editing_then_usage_error_and_no_request() {
    // GIVEN: A mock that must never be hit
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Editing with nothing to add or remove
    let result = client.edit_tag(&["item-1"], &[], &[]).await;

    // THEN: Usage error, and the mock expectation of zero calls holds on drop
    assert!(matches!(result, Err(InoreaderClientError::Usage { .. })));
}

/// **VALUE**: Verifies repeated `a`, `r` and `i` parameters and the raw text result.
#[tokio::test]
async fn given_tags_and_items_when_editing_then_repeated_params_and_raw_text() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("POST"))
        .and(path("/reader/api/0/edit-tag"))
        .and(query_param("a", "user/-/state/com.google/read"))
        .and(query_param("a", "user/-/label/done"))
        .and(query_param("r", "user/-/state/com.google/starred"))
        .and(query_param("i", "item-1"))
        .and(query_param("i", "item-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let text = client
        .edit_tag(
            &["item-1", "item-2"],
            &[SystemTag::Read.into(), Tag::custom("done")],
            &[SystemTag::Starred.into()],
        )
        .await
        .unwrap();

    assert_eq!(text, "OK");
}

/// **VALUE**: Verifies a failed call leaves the client usable.
///
/// **BUG THIS CATCHES**: Would catch an error path that closes the client.
#[tokio::test]
async fn given_server_error_when_retried_manually_then_client_still_usable() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .respond_with(json_response(TAGS_JSON))
        .mount(&server)
        .await;

    let first = client.get_tags().await;
    let second = client.get_tags().await;

    match first {
        Err(err @ InoreaderClientError::Server { .. }) => {
            assert_eq!(err.status_code(), Some(503));
            assert_eq!(err.error_category(), "server_error");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    assert_eq!(second.unwrap().tags.len(), 2);
}

/// **VALUE**: Verifies a malformed body reports the failing field path.
#[tokio::test]
async fn given_body_with_wrong_type_when_decoding_then_decode_error_with_path() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .respond_with(json_response(
            r#"{"tags":[{"id":"x","sortid":"y","unreadCount":"many"}]}"#,
        ))
        .mount(&server)
        .await;

    let result = client.get_tags().await;

    match result {
        Err(InoreaderClientError::Decode { path, .. }) => {
            assert!(path.contains("unreadCount"), "got path: {path}");
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

/// **VALUE**: Verifies independent calls can run concurrently on one client.
#[tokio::test]
async fn given_one_client_when_calls_run_concurrently_then_both_succeed() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/user-info"))
        .respond_with(json_response(USER_INFO_JSON))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/tag/list"))
        .respond_with(json_response(TAGS_JSON))
        .mount(&server)
        .await;

    let (user, tags) = tokio::join!(client.get_user_info(), client.get_tags());

    assert_eq!(user.unwrap().signup_time.timestamp(), 1_163_850_082);
    assert_eq!(tags.unwrap().tags.len(), 2);
}

/// **VALUE**: Verifies close is idempotent and later queries fail without I/O.
///
/// **WHY THIS MATTERS**: Callers close in cleanup paths that may run twice.
///
/// **BUG THIS CATCHES**: Would catch a second close erroring, or a closed client
/// silently rebuilding a connection.
#[tokio::test]
async fn given_closed_client_when_closed_again_and_queried_then_ok_then_client_closed() {
    // GIVEN: A logged-in client and a user-info mock that must not be hit
    let server = MockServer::start().await;
    let mut client = logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/reader/api/0/user-info"))
        .respond_with(json_response(USER_INFO_JSON))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Closing twice
    assert!(client.close().is_ok());
    assert!(client.close().is_ok());

    // THEN: Client reports closed and queries fail
    assert!(client.is_closed());
    let result = client.get_user_info().await;
    assert!(matches!(
        result,
        Err(InoreaderClientError::ClientClosed { .. })
    ));
}
