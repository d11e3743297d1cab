use serde::Serialize;

use vclens_core::{EnrichedComment, SentimentLabel};

/// Counts per label plus the qualitative verdict line.
#[derive(Debug, Serialize)]
pub struct VerdictView {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub leading: SentimentLabel,
    pub message: &'static str,
}

/// Pick the label with the strictly highest count; ties resolve to the
/// first-encountered label in [`SentimentLabel::ALL`] order.
#[must_use]
pub fn verdict(rows: &[EnrichedComment]) -> VerdictView {
    let count =
        |label: SentimentLabel| rows.iter().filter(|r| r.sentiment == Some(label)).count();

    let positive = count(SentimentLabel::Positive);
    let neutral = count(SentimentLabel::Neutral);
    let negative = count(SentimentLabel::Negative);

    let mut leading = SentimentLabel::ALL[0];
    let mut leading_count = count(leading);
    for &label in &SentimentLabel::ALL[1..] {
        let c = count(label);
        if c > leading_count {
            leading = label;
            leading_count = c;
        }
    }

    let message = match leading {
        SentimentLabel::Positive => "Overall the audience warmed to this guest.",
        SentimentLabel::Neutral => "The audience stayed neutral about this guest.",
        SentimentLabel::Negative => "Overall the audience turned on this guest.",
    };

    VerdictView {
        positive,
        neutral,
        negative,
        leading,
        message,
    }
}
