//! `report` subcommand: summary counts and verdict on stdout.

use vclens_core::AppConfig;

use crate::select::select_videos;

pub(crate) fn run(config: &AppConfig, slug: &str) -> anyhow::Result<()> {
    let videos = select_videos(config, Some(slug))?;
    let video = &videos[0];

    let path = config.data_dir.join(video.enriched_csv_name());
    let dataset = vclens_store::load_dataset(&path)?;

    let verdict = vclens_analytics::verdict(&dataset.rows);

    println!("{}", video.title);
    println!("comments analyzed: {}", dataset.rows.len());
    println!("  positive: {}", verdict.positive);
    println!("  neutral:  {}", verdict.neutral);
    println!("  negative: {}", verdict.negative);
    println!(
        "verdict: {}. {}",
        verdict.leading.display_name(),
        verdict.message
    );

    Ok(())
}
