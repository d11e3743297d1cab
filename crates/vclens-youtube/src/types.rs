//! Typed subset of the `commentThreads` response body.
//!
//! Only the fields the collector projects are modeled; everything else in the
//! response is ignored by serde. All snippet fields are optional because the
//! API omits them for deleted or restricted comments, and a missing like
//! count must survive as null, not zero.

use serde::Deserialize;

use vclens_core::CommentRecord;

#[derive(Debug, Deserialize)]
pub struct CommentThreadsResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
pub struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
    #[serde(rename = "textDisplay")]
    pub text_display: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<i64>,
}

impl CommentThread {
    /// Project the four collected fields into a flat record.
    #[must_use]
    pub fn into_record(self) -> CommentRecord {
        let snippet = self.snippet.top_level_comment.snippet;
        CommentRecord {
            author: snippet.author_display_name.unwrap_or_default(),
            text: snippet.text_display.unwrap_or_default(),
            published_at: snippet.published_at.unwrap_or_default(),
            likes: snippet.like_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_nested_snippet() {
        let body = serde_json::json!({
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "viewer",
                            "textDisplay": "great interview",
                            "publishedAt": "2024-05-01T10:00:00Z",
                            "likeCount": 7
                        }
                    }
                }
            }],
            "nextPageToken": "tok-2"
        });
        let parsed: CommentThreadsResponse = serde_json::from_value(body).expect("parse");
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.next_page_token.as_deref(), Some("tok-2"));

        let record = parsed.items.into_iter().next().unwrap().into_record();
        assert_eq!(record.author, "viewer");
        assert_eq!(record.text, "great interview");
        assert_eq!(record.published_at, "2024-05-01T10:00:00Z");
        assert_eq!(record.likes, Some(7));
    }

    #[test]
    fn missing_like_count_stays_null() {
        let body = serde_json::json!({
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "viewer",
                            "textDisplay": "hi",
                            "publishedAt": "2024-05-01T10:00:00Z"
                        }
                    }
                }
            }]
        });
        let parsed: CommentThreadsResponse = serde_json::from_value(body).expect("parse");
        let record = parsed.items.into_iter().next().unwrap().into_record();
        assert_eq!(record.likes, None, "missing likeCount must not default to 0");
    }

    #[test]
    fn missing_items_parses_as_empty() {
        let parsed: CommentThreadsResponse =
            serde_json::from_value(serde_json::json!({})).expect("parse");
        assert!(parsed.items.is_empty());
        assert!(parsed.next_page_token.is_none());
    }
}
