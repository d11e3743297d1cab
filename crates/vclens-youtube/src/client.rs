//! HTTP client for the `YouTube` Data API `commentThreads` endpoint.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the multi-page fetch loop. Non-2xx responses carrying the API's JSON
//! `error` envelope surface as [`YoutubeError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use vclens_core::CommentRecord;

use crate::error::YoutubeError;
use crate::types::CommentThreadsResponse;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Maximum number of pages to fetch per video before returning an error.
/// Prevents infinite loops on cycling page tokens.
pub(crate) const MAX_PAGES: usize = 500;

/// Client for the `commentThreads` endpoint.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise the trailing slash so the endpoint path is appended
        // exactly once regardless of how the base URL was written.
        let normalised = format!("{}/commentThreads", base_url.trim_end_matches('/'));
        let endpoint =
            Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Fetches the complete set of top-level comments for one video.
    ///
    /// Starts with the first page (no token), follows `nextPageToken` until a
    /// response carries none, and returns all records collected.
    /// `inter_page_delay_ms` is the flat delay between page requests (applied
    /// before every page except the first).
    ///
    /// All-or-nothing: on any page failure, already-fetched records are
    /// discarded and the error is returned. There is no retry.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_comments_page`]. Returns
    /// [`YoutubeError::PaginationLimit`] if the number of pages exceeds
    /// [`MAX_PAGES`].
    pub async fn fetch_all_comments(
        &self,
        video_id: &str,
        page_size: u32,
        inter_page_delay_ms: u64,
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let mut all_comments: Vec<CommentRecord> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut is_first_page = true;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(YoutubeError::PaginationLimit {
                    video_id: video_id.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            if !is_first_page && inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_page_delay_ms)).await;
            }
            is_first_page = false;

            let response = self
                .fetch_comments_page(video_id, page_size, page_token.as_deref())
                .await?;

            all_comments.extend(
                response
                    .items
                    .into_iter()
                    .map(crate::types::CommentThread::into_record),
            );

            page_token = response.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() {
                break;
            }
        }

        tracing::debug!(video_id, pages = page_count, comments = all_comments.len(), "fetched all comment pages");
        Ok(all_comments)
    }

    /// Fetches one page of top-level comments.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] — non-2xx status with a JSON `error` envelope.
    /// - [`YoutubeError::UnexpectedStatus`] — non-2xx status without one.
    /// - [`YoutubeError::Http`] — network or TLS failure.
    /// - [`YoutubeError::Deserialize`] — 2xx body that does not match the
    ///   expected shape.
    pub async fn fetch_comments_page(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadsResponse, YoutubeError> {
        let url = self.comment_threads_url(video_id, page_size, page_token);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Some(message) = extract_api_error_message(&body) {
                return Err(YoutubeError::ApiError {
                    status: status.as_u16(),
                    message,
                });
            }
            return Err(YoutubeError::UnexpectedStatus {
                status: status.as_u16(),
                url: redacted(&url),
            });
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: format!("commentThreads(videoId={video_id})"),
            source: e,
        })
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    fn comment_threads_url(&self, video_id: &str, page_size: u32, page_token: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("part", "snippet");
            pairs.append_pair("videoId", video_id);
            pairs.append_pair("maxResults", &page_size.to_string());
            pairs.append_pair("key", &self.api_key);
            if let Some(token) = page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        url
    }
}

/// Pulls `error.message` out of the API's JSON error envelope, if the body
/// carries one.
fn extract_api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Strips the `key` query parameter before a URL lands in an error message.
fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut clean = url.clone();
    clean.set_query(None);
    if !pairs.is_empty() {
        let mut serializer = clean.query_pairs_mut();
        for (k, v) in &pairs {
            serializer.append_pair(k, v);
        }
    }
    clean.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> YoutubeClient {
        YoutubeClient::with_base_url("test-key", 30, "vclens-test/0.1", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn comment_threads_url_without_token() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client.comment_threads_url("jSci-uMyUHo", 100, None);
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/commentThreads?part=snippet&videoId=jSci-uMyUHo&maxResults=100&key=test-key"
        );
    }

    #[test]
    fn comment_threads_url_with_token() {
        let client = test_client("https://www.googleapis.com/youtube/v3/");
        let url = client.comment_threads_url("abc", 100, Some("tok-2"));
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/commentThreads?part=snippet&videoId=abc&maxResults=100&key=test-key&pageToken=tok-2"
        );
    }

    #[test]
    fn comment_threads_url_encodes_special_characters() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client.comment_threads_url("a b&c", 100, None);
        assert!(
            !url.as_str().contains("a b&c"),
            "video id should be percent-encoded: {url}"
        );
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = YoutubeClient::with_base_url("k", 30, "ua", "not a url");
        assert!(matches!(
            result,
            Err(YoutubeError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn extract_api_error_message_reads_envelope() {
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#;
        assert_eq!(
            extract_api_error_message(body).as_deref(),
            Some("quotaExceeded")
        );
    }

    #[test]
    fn extract_api_error_message_none_for_plain_body() {
        assert!(extract_api_error_message("not json").is_none());
        assert!(extract_api_error_message(r#"{"items": []}"#).is_none());
    }

    #[test]
    fn redacted_strips_api_key() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client.comment_threads_url("abc", 100, None);
        let shown = redacted(&url);
        assert!(!shown.contains("test-key"), "key leaked: {shown}");
        assert!(shown.contains("videoId=abc"));
    }
}
