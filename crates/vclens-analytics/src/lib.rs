//! Pure view computations for the dashboard.
//!
//! Every function here recomputes from the in-memory rows on each call; no
//! derived state is persisted. Column-presence checks live with the caller;
//! these functions simply compute over whatever rows they are given.

mod verdict;
mod views;
mod wordcloud;

pub use verdict::{verdict, VerdictView};
pub use views::{
    daily_trend, likes_by_sentiment, sentiment_distribution, summary, top_comments,
    DistributionSlice, LikesBySentiment, PreviewRow, SummaryView, TopComment, TopCommentsBlock,
    TrendPoint, TrendSeries,
};
pub use wordcloud::{build_word_cloud, word_frequencies, WordCloud, WordFrequency};
