//! `collect` subcommand: the paginated fetch loop over the catalog.
//!
//! Videos are processed one at a time. A failed video is logged and the loop
//! moves on; the command fails only when every selected video failed. There
//! is no retry and no partial output: a video either lands a complete CSV
//! or nothing.

use vclens_core::AppConfig;
use vclens_youtube::YoutubeClient;

use crate::select::select_videos;

pub(crate) async fn run(config: &AppConfig, video_filter: Option<&str>) -> anyhow::Result<()> {
    // Checked before any network activity: without a key there is nothing to do.
    let api_key = config.require_youtube_api_key()?;

    let videos = select_videos(config, video_filter)?;
    if videos.is_empty() {
        anyhow::bail!("video catalog is empty; nothing to collect");
    }

    let client = YoutubeClient::new(
        api_key,
        config.collector_request_timeout_secs,
        &config.collector_user_agent,
    )?;

    let mut total_comments = 0usize;
    let mut failed_videos = 0usize;

    for video in &videos {
        let slug = video.slug();
        tracing::info!(slug, video_id = %video.video_id, "collecting comments");

        match client
            .fetch_all_comments(
                &video.video_id,
                config.collector_page_size,
                config.collector_inter_page_delay_ms,
            )
            .await
        {
            Ok(records) => {
                let path = config.data_dir.join(video.raw_csv_name());
                vclens_store::write_raw_comments(&path, &records)?;
                tracing::info!(
                    slug,
                    comments = records.len(),
                    path = %path.display(),
                    "raw dataset written"
                );
                total_comments += records.len();
            }
            Err(e) => {
                tracing::error!(slug, error = %e, "collection failed");
                failed_videos += 1;
            }
        }
    }

    if failed_videos > 0 {
        tracing::warn!(
            failed_videos,
            total_videos = videos.len(),
            "some videos failed during collection"
        );
    }

    if failed_videos == videos.len() {
        anyhow::bail!("all {failed_videos} videos failed collection");
    }

    tracing::info!(total_comments, "collection finished");
    Ok(())
}
