//! `label` subcommand: turn raw collector CSVs into enriched datasets.

use vclens_core::AppConfig;
use vclens_store::EnrichedCsvRow;

use crate::select::select_videos;

pub(crate) fn run(config: &AppConfig, video_filter: Option<&str>) -> anyhow::Result<()> {
    let videos = select_videos(config, video_filter)?;

    let mut labeled_videos = 0usize;

    for video in &videos {
        let slug = video.slug();
        let raw_path = config.data_dir.join(video.raw_csv_name());
        if !raw_path.exists() {
            tracing::warn!(slug, path = %raw_path.display(), "no raw dataset, skipping; run collect first");
            continue;
        }

        let records = vclens_store::read_raw_comments(&raw_path)?;
        let rows: Vec<EnrichedCsvRow> = records
            .into_iter()
            .map(|record| {
                let labeled = vclens_sentiment::label_comment(&record.text);
                EnrichedCsvRow {
                    author: record.author,
                    text: record.text,
                    published_at: record.published_at,
                    likes: record.likes,
                    clean_text: labeled.clean_text,
                    sentiment: labeled.sentiment,
                }
            })
            .collect();

        let enriched_path = config.data_dir.join(video.enriched_csv_name());
        vclens_store::write_enriched_comments(&enriched_path, &rows)?;
        tracing::info!(
            slug,
            rows = rows.len(),
            path = %enriched_path.display(),
            "enriched dataset written"
        );
        labeled_videos += 1;
    }

    if labeled_videos == 0 {
        anyhow::bail!("no raw datasets found; run collect first");
    }

    Ok(())
}
