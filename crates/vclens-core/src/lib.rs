mod app_config;
mod catalog;
mod comments;
mod config;
mod error;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, VideoCatalog, VideoConfig};
pub use comments::{CommentRecord, EnrichedComment, SentimentLabel};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
