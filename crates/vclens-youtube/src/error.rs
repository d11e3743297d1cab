use thiserror::Error;

/// Errors returned by the `YouTube` comments client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a JSON `error` envelope (quota exhausted, comments
    /// disabled, bad key, ...).
    #[error("YouTube API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Non-2xx response without a parseable error envelope.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The page loop exceeded the cycle guard.
    #[error("pagination limit reached for video {video_id}: exceeded {max_pages} pages")]
    PaginationLimit { video_id: String, max_pages: usize },

    /// A client could not be constructed from the given base URL.
    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
