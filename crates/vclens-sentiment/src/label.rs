use vclens_core::SentimentLabel;

use crate::clean::clean_text;
use crate::lexicon::{label_for_score, lexicon_score};

/// Result of labeling one comment.
#[derive(Debug, Clone)]
pub struct LabeledComment {
    pub clean_text: String,
    pub sentiment: SentimentLabel,
    /// Lexicon score in `[-1.0, 1.0]` the label was derived from.
    pub score: f32,
}

/// Clean and label one comment text. Rows are never dropped: empty or
/// unknown text scores 0 and lands on NEUTRAL.
#[must_use]
pub fn label_comment(text: &str) -> LabeledComment {
    let clean_text = clean_text(text);
    let score = lexicon_score(&clean_text);
    LabeledComment {
        sentiment: label_for_score(score),
        clean_text,
        score,
    }
}
