//! Enriched dataset loading and normalization.
//!
//! Loading performs the two normalization passes the dashboard depends on:
//! sentiment values are uppercased, trimmed, and rows with anything outside
//! the three allowed labels are dropped; a calendar date is derived from the
//! `published_at` date column when present, falling back to the raw
//! `publishedAt` timestamp column. Column presence is recorded so each view
//! can degrade on its own when a column is missing.

use std::path::Path;

use chrono::NaiveDate;

use vclens_core::{EnrichedComment, SentimentLabel};

use crate::error::StoreError;

/// A loaded, normalized dataset plus the column-presence flags views consult.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<EnrichedComment>,
    pub has_sentiment: bool,
    pub has_likes: bool,
    pub has_dates: bool,
    pub has_clean_text: bool,
}

/// Load and normalize one enriched CSV.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file does not exist, otherwise
/// [`StoreError::Csv`] on read/parse failure.
pub fn load_dataset(path: &Path) -> Result<Dataset, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound {
            path: path.display().to_string(),
        });
    }

    let csv_error = |e: csv::Error| StoreError::Csv {
        path: path.display().to_string(),
        source: e,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();
    let idx = |name: &str| headers.iter().position(|h| h == name);

    let author_idx = idx("author");
    let text_idx = idx("text");
    let clean_text_idx = idx("clean_text");
    let likes_idx = idx("likes");
    let sentiment_idx = idx("sentiment");
    // The already-derived date column wins over the raw timestamp column.
    let date_idx = idx("published_at");
    let timestamp_idx = idx("publishedAt");

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let field = |i: Option<usize>| {
            i.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let sentiment = if sentiment_idx.is_some() {
            match field(sentiment_idx).and_then(SentimentLabel::from_normalized) {
                Some(label) => Some(label),
                None => {
                    dropped += 1;
                    continue;
                }
            }
        } else {
            None
        };

        let published_at = if date_idx.is_some() {
            field(date_idx).and_then(parse_date_value)
        } else {
            field(timestamp_idx).and_then(parse_date_value)
        };

        rows.push(EnrichedComment {
            author: field(author_idx).unwrap_or_default().to_string(),
            text: field(text_idx).unwrap_or_default().to_string(),
            clean_text: field(clean_text_idx).map(ToString::to_string),
            published_at,
            likes: field(likes_idx).and_then(parse_likes),
            sentiment,
        });
    }

    if dropped > 0 {
        tracing::debug!(
            path = %path.display(),
            dropped,
            "excluded rows with unknown sentiment values"
        );
    }

    Ok(Dataset {
        rows,
        has_sentiment: sentiment_idx.is_some(),
        has_likes: likes_idx.is_some(),
        has_dates: date_idx.is_some() || timestamp_idx.is_some(),
        has_clean_text: clean_text_idx.is_some(),
    })
}

/// Parse a like count. Accepts plain integers and float renderings such as
/// `"5.0"`, which tabular tools produce for integer columns holding nulls.
#[allow(clippy::cast_possible_truncation)]
fn parse_likes(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f as i64))
}

/// Parse either a bare calendar date (`2024-05-01`) or an ISO-8601 timestamp
/// (`2024-05-01T10:00:00Z`), yielding the calendar date.
fn parse_date_value(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
