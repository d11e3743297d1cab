use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use vclens_core::{EnrichedComment, SentimentLabel};

/// Record count and a preview of the first rows.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub total_comments: usize,
    pub preview: Vec<PreviewRow>,
}

#[derive(Debug, Serialize)]
pub struct PreviewRow {
    pub author: String,
    pub text: String,
    pub published_at: Option<NaiveDate>,
    pub likes: Option<i64>,
    pub sentiment: Option<SentimentLabel>,
}

#[must_use]
pub fn summary(rows: &[EnrichedComment], preview_rows: usize) -> SummaryView {
    SummaryView {
        total_comments: rows.len(),
        preview: rows
            .iter()
            .take(preview_rows)
            .map(|r| PreviewRow {
                author: r.author.clone(),
                text: r.text.clone(),
                published_at: r.published_at,
                likes: r.likes,
                sentiment: r.sentiment,
            })
            .collect(),
    }
}

/// One slice of the sentiment ring chart.
#[derive(Debug, Serialize)]
pub struct DistributionSlice {
    pub sentiment: SentimentLabel,
    pub count: usize,
    /// Proportion of labeled rows, in `[0.0, 1.0]`. 0 when there are no rows.
    pub share: f64,
}

/// Proportion of rows per sentiment label, in the fixed label order.
#[must_use]
pub fn sentiment_distribution(rows: &[EnrichedComment]) -> Vec<DistributionSlice> {
    let total = rows.iter().filter(|r| r.sentiment.is_some()).count();
    SentimentLabel::ALL
        .iter()
        .map(|&label| {
            let count = rows.iter().filter(|r| r.sentiment == Some(label)).count();
            #[allow(clippy::cast_precision_loss)]
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            DistributionSlice {
                sentiment: label,
                count,
                share,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct TopComment {
    pub author: String,
    pub text: String,
    pub likes: Option<i64>,
}

/// The top-liked comments for one sentiment label.
#[derive(Debug, Serialize)]
pub struct TopCommentsBlock {
    pub sentiment: SentimentLabel,
    pub comments: Vec<TopComment>,
}

/// For each sentiment label, the `per_label` highest-like-count rows.
///
/// Rows without a like count sort last; ties keep their file order.
#[must_use]
pub fn top_comments(rows: &[EnrichedComment], per_label: usize) -> Vec<TopCommentsBlock> {
    SentimentLabel::ALL
        .iter()
        .map(|&label| {
            let mut subset: Vec<&EnrichedComment> = rows
                .iter()
                .filter(|r| r.sentiment == Some(label))
                .collect();
            subset.sort_by_key(|r| Reverse(r.likes.unwrap_or(i64::MIN)));
            TopCommentsBlock {
                sentiment: label,
                comments: subset
                    .into_iter()
                    .take(per_label)
                    .map(|r| TopComment {
                        author: r.author.clone(),
                        text: r.text.clone(),
                        likes: r.likes,
                    })
                    .collect(),
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct LikesBySentiment {
    pub sentiment: SentimentLabel,
    pub total_likes: i64,
}

/// Sum of like counts grouped by sentiment label. Missing like counts
/// contribute nothing to the sums.
#[must_use]
pub fn likes_by_sentiment(rows: &[EnrichedComment]) -> Vec<LikesBySentiment> {
    SentimentLabel::ALL
        .iter()
        .map(|&label| LikesBySentiment {
            sentiment: label,
            total_likes: rows
                .iter()
                .filter(|r| r.sentiment == Some(label))
                .filter_map(|r| r.likes)
                .fold(0i64, i64::saturating_add),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// One line of the daily trend chart.
#[derive(Debug, Serialize)]
pub struct TrendSeries {
    pub sentiment: SentimentLabel,
    pub points: Vec<TrendPoint>,
}

/// Count of comments per (date, sentiment) pair, one date-ordered series per
/// label. Rows without a derived date are skipped.
#[must_use]
pub fn daily_trend(rows: &[EnrichedComment]) -> Vec<TrendSeries> {
    SentimentLabel::ALL
        .iter()
        .map(|&label| {
            let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
            for row in rows {
                if row.sentiment == Some(label) {
                    if let Some(date) = row.published_at {
                        *counts.entry(date).or_insert(0) += 1;
                    }
                }
            }
            TrendSeries {
                sentiment: label,
                points: counts
                    .into_iter()
                    .map(|(date, count)| TrendPoint { date, count })
                    .collect(),
            }
        })
        .collect()
}
