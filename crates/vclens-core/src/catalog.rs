use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One tracked interview video.
///
/// The slug derived from `title` is the canonical identifier: it selects the
/// video in the CLI and the dashboard, and both the raw and enriched CSV file
/// names are derived from it, so the collector and the dashboard can never
/// point at different files for the same video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    pub title: String,
    pub video_id: String,
    pub notes: Option<String>,
}

impl VideoConfig {
    /// Generate a URL-safe slug from the video title.
    #[must_use]
    pub fn slug(&self) -> String {
        self.title
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// File name of the raw collector output for this video.
    #[must_use]
    pub fn raw_csv_name(&self) -> String {
        format!("{}_raw.csv", self.slug())
    }

    /// File name of the enriched dataset the dashboard loads.
    #[must_use]
    pub fn enriched_csv_name(&self) -> String {
        format!("{}_enriched.csv", self.slug())
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoCatalog {
    pub videos: Vec<VideoConfig>,
}

impl VideoCatalog {
    /// Look up a video by its slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&VideoConfig> {
        self.videos.iter().find(|v| v.slug() == slug)
    }
}

/// Load and validate the video catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<VideoCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: VideoCatalog = serde_yaml::from_str(&content)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &VideoCatalog) -> Result<(), ConfigError> {
    let mut seen_titles = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut seen_ids = HashSet::new();

    for video in &catalog.videos {
        if video.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "video title must be non-empty".to_string(),
            ));
        }

        if video.video_id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "video '{}' has an empty video_id",
                video.title
            )));
        }

        let lower_title = video.title.to_lowercase();
        if !seen_titles.insert(lower_title) {
            return Err(ConfigError::Validation(format!(
                "duplicate video title: '{}'",
                video.title
            )));
        }

        let slug = video.slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "video '{}' produces an empty slug",
                video.title
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate video slug: '{}' (from video '{}')",
                slug, video.title
            )));
        }

        if !seen_ids.insert(video.video_id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate video_id: '{}' (from video '{}')",
                video.video_id, video.title
            )));
        }
    }

    Ok(())
}
