use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One top-level comment as projected from an API response item.
///
/// This is the exact row shape of the raw collector CSV: four columns, with
/// the timestamp kept as the ISO-8601 string the API returned and the like
/// count passed through as null when the API omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub likes: Option<i64>,
}

/// Sentiment label attached to a comment before dashboard load.
///
/// The variant order is load-bearing: verdict ties resolve to the
/// first-encountered label in [`SentimentLabel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Parse a raw column value after uppercasing and trimming.
    ///
    /// Returns `None` for anything outside the three allowed values; the
    /// loader drops such rows.
    #[must_use]
    pub fn from_normalized(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "POSITIVE" => Some(SentimentLabel::Positive),
            "NEUTRAL" => Some(SentimentLabel::Neutral),
            "NEGATIVE" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
        }
    }

    /// Capitalized form used in operator-facing output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a loaded enriched dataset.
///
/// `sentiment` is `Some` for every row whenever the source file carried a
/// sentiment column (rows with unknown values are dropped at load); it is
/// `None` only when the column was absent entirely, in which case views that
/// need it degrade with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedComment {
    pub author: String,
    pub text: String,
    pub clean_text: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub likes: Option<i64>,
    pub sentiment: Option<SentimentLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_normalized_accepts_mixed_case_and_whitespace() {
        assert_eq!(
            SentimentLabel::from_normalized("  positive "),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            SentimentLabel::from_normalized("Neutral"),
            Some(SentimentLabel::Neutral)
        );
        assert_eq!(
            SentimentLabel::from_normalized("NEGATIVE"),
            Some(SentimentLabel::Negative)
        );
    }

    #[test]
    fn from_normalized_rejects_unknown_values() {
        assert_eq!(SentimentLabel::from_normalized("mixed"), None);
        assert_eq!(SentimentLabel::from_normalized(""), None);
        assert_eq!(SentimentLabel::from_normalized("pos"), None);
    }

    #[test]
    fn label_serializes_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).expect("serialize");
        assert_eq!(json, "\"POSITIVE\"");
    }

    #[test]
    fn comment_record_uses_camel_case_timestamp_column() {
        let record = CommentRecord {
            author: "a".to_string(),
            text: "t".to_string(),
            published_at: "2024-05-01T10:00:00Z".to_string(),
            likes: None,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"publishedAt\""), "got: {json}");
        assert!(json.contains("\"likes\":null"), "got: {json}");
    }

    #[test]
    fn verdict_tie_order_starts_with_positive() {
        assert_eq!(SentimentLabel::ALL[0], SentimentLabel::Positive);
        assert_eq!(SentimentLabel::ALL[1], SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::ALL[2], SentimentLabel::Negative);
    }
}
