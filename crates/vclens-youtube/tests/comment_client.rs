//! Integration tests for `YoutubeClient::fetch_all_comments`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy paths (empty, single-page,
//! multi-page) and the error variants the fetch loop can propagate.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vclens_youtube::{YoutubeClient, YoutubeError};

/// Builds a `YoutubeClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client(server: &MockServer) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 5, "vclens-test/0.1", &server.uri())
        .expect("failed to build test YoutubeClient")
}

/// Minimal one-comment page body.
fn one_comment_page(author: &str, likes: Option<i64>, next_token: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "items": [{
            "snippet": {
                "topLevelComment": {
                    "snippet": {
                        "authorDisplayName": author,
                        "textDisplay": format!("comment from {author}"),
                        "publishedAt": "2024-05-01T10:00:00Z",
                        "likeCount": likes
                    }
                }
            }
        }]
    });
    if let Some(token) = next_token {
        body["nextPageToken"] = json!(token);
    }
    body
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_comments_returns_empty_vec_when_response_has_no_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": []})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(
        result.unwrap().is_empty(),
        "expected empty Vec when server returns no items"
    );
}

#[tokio::test]
async fn fetch_all_comments_returns_all_comments_on_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "vid-1"))
        .and(query_param("maxResults", "100"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&one_comment_page("alice", Some(3), None)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let comments = result.unwrap();
    assert_eq!(comments.len(), 1, "expected exactly 1 comment");
    assert_eq!(comments[0].author, "alice");
    assert_eq!(comments[0].likes, Some(3));
}

#[tokio::test]
async fn fetch_all_comments_follows_pagination_across_two_pages() {
    let server = MockServer::start().await;

    // Page 1: no pageToken param, returns a nextPageToken.
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&one_comment_page("alice", Some(1), Some("cursor2"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Page 2: pageToken=cursor2, no further token.
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "cursor2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&one_comment_page("bob", Some(2), None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let comments = result.unwrap();
    assert_eq!(comments.len(), 2, "expected union of both pages");
    assert_eq!(comments[0].author, "alice");
    assert_eq!(comments[1].author, "bob");
    // Mock expectations assert exactly two requests were issued.
    server.verify().await;
}

#[tokio::test]
async fn fetch_all_comments_passes_missing_like_count_through_as_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "carol",
                            "textDisplay": "no likes field",
                            "publishedAt": "2024-05-02T09:00:00Z"
                        }
                    }
                }
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let comments = client
        .fetch_all_comments("vid-1", 100, 0)
        .await
        .expect("fetch should succeed");

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].likes, None, "absent likeCount must stay null");
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_comments_surfaces_api_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&json!({
            "error": {"code": 403, "message": "commentsDisabled"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    match result {
        Err(YoutubeError::ApiError { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "commentsDisabled");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_comments_surfaces_unexpected_status_without_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    match result {
        Err(YoutubeError::UnexpectedStatus { status, url }) => {
            assert_eq!(status, 500);
            assert!(
                !url.contains("test-key"),
                "error message must not leak the api key: {url}"
            );
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_comments_fails_on_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    assert!(
        matches!(result, Err(YoutubeError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_all_comments_discards_earlier_pages_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&one_comment_page("alice", Some(1), Some("cursor2"))),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "cursor2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_all_comments("vid-1", 100, 0).await;

    assert!(
        result.is_err(),
        "a failing page must abort the whole video, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_all_comments_treats_empty_next_token_as_last_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&one_comment_page("dave", None, Some(""))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let comments = client
        .fetch_all_comments("vid-1", 100, 0)
        .await
        .expect("fetch should succeed");

    assert_eq!(comments.len(), 1);
    server.verify().await;
}
