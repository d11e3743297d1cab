use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub videos_path: PathBuf,
    pub data_dir: PathBuf,
    pub youtube_api_key: Option<String>,
    pub collector_request_timeout_secs: u64,
    pub collector_user_agent: String,
    pub collector_page_size: u32,
    pub collector_inter_page_delay_ms: u64,
}

impl AppConfig {
    /// The collector's credential. Absence is a fatal startup condition for
    /// the collector, checked before any network activity; the dashboard
    /// never needs it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `YOUTUBE_API_KEY` is unset.
    pub fn require_youtube_api_key(&self) -> Result<&str, ConfigError> {
        self.youtube_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("videos_path", &self.videos_path)
            .field("data_dir", &self.data_dir)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "collector_request_timeout_secs",
                &self.collector_request_timeout_secs,
            )
            .field("collector_user_agent", &self.collector_user_agent)
            .field("collector_page_size", &self.collector_page_size)
            .field(
                "collector_inter_page_delay_ms",
                &self.collector_inter_page_delay_ms,
            )
            .finish()
    }
}
