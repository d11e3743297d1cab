mod client;
mod error;
mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use types::{CommentSnippet, CommentThread, CommentThreadsResponse};
