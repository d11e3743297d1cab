use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("VCLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("VCLENS_LOG_LEVEL", "info");
    let videos_path = PathBuf::from(or_default("VCLENS_VIDEOS_PATH", "./config/videos.yaml"));
    let data_dir = PathBuf::from(or_default("VCLENS_DATA_DIR", "./data"));
    let youtube_api_key = lookup("YOUTUBE_API_KEY").ok();

    let collector_request_timeout_secs = parse_u64("VCLENS_COLLECTOR_REQUEST_TIMEOUT_SECS", "30")?;
    let collector_user_agent = or_default(
        "VCLENS_COLLECTOR_USER_AGENT",
        "vclens/0.1 (comment-analytics)",
    );
    let collector_page_size = parse_u32("VCLENS_COLLECTOR_PAGE_SIZE", "100")?;
    let collector_inter_page_delay_ms = parse_u64("VCLENS_COLLECTOR_INTER_PAGE_DELAY_MS", "1000")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        videos_path,
        data_dir,
        youtube_api_key,
        collector_request_timeout_secs,
        collector_user_agent,
        collector_page_size,
        collector_inter_page_delay_ms,
    })
}
