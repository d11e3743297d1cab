//! Enriched CSV: the raw collector columns plus `clean_text` and `sentiment`,
//! the artifact the dashboard loads.

use std::path::Path;

use serde::Serialize;

use vclens_core::SentimentLabel;

use crate::error::StoreError;

/// One row of the enriched CSV as the labeler writes it.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedCsvRow {
    pub author: String,
    pub text: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub likes: Option<i64>,
    pub clean_text: String,
    pub sentiment: SentimentLabel,
}

/// Write an enriched dataset, replacing any previous file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] or [`StoreError::Csv`] on write failure.
pub fn write_enriched_comments(path: &Path, rows: &[EnrichedCsvRow]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| StoreError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    for row in rows {
        writer.serialize(row).map_err(|e| StoreError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
