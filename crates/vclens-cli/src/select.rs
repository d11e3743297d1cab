//! Shared catalog selection for the subcommands.

use vclens_core::{AppConfig, VideoCatalog, VideoConfig};

/// Load the catalog and narrow it to the `--video` filter, if any.
///
/// With a filter, an unknown slug is an error. Without one, every catalog
/// video is returned.
pub(crate) fn select_videos(
    config: &AppConfig,
    video_filter: Option<&str>,
) -> anyhow::Result<Vec<VideoConfig>> {
    let catalog: VideoCatalog = vclens_core::load_catalog(&config.videos_path)?;

    if let Some(slug) = video_filter {
        let video = catalog
            .find(slug)
            .ok_or_else(|| anyhow::anyhow!("video '{slug}' not found in {}", config.videos_path.display()))?;
        Ok(vec![video.clone()])
    } else {
        Ok(catalog.videos)
    }
}
