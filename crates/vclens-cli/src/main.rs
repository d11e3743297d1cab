mod collect;
mod label;
mod report;
mod select;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vclens-cli")]
#[command(about = "vclens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Download comments for catalog videos into raw CSVs.
    Collect {
        /// Only this video slug; all catalog videos when omitted.
        #[arg(long)]
        video: Option<String>,
    },
    /// Attach clean text and sentiment labels to collected raw CSVs.
    Label {
        /// Only this video slug; all catalog videos when omitted.
        #[arg(long)]
        video: Option<String>,
    },
    /// Print summary counts and the verdict for one enriched dataset.
    Report {
        #[arg(long)]
        video: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = vclens_core::load_app_config_from_env()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect { video } => collect::run(&config, video.as_deref()).await,
        Commands::Label { video } => label::run(&config, video.as_deref()),
        Commands::Report { video } => report::run(&config, &video),
    }
}
