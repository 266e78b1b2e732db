use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use url::Url;

pub fn parse_album_url(s: &str) -> Result<String> {
    let url = Url::parse(s.trim()).map_err(|e| anyhow!("invalid album url: {}", e))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(anyhow!("unsupported url scheme `{}`", other)),
    }
}

/// Accepts the usual severity names, including `warning` and `critical`
pub fn parse_log_level(s: &str) -> Result<LevelFilter> {
    Ok(match s.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => LevelFilter::OFF,
        "critical" | "fatal" | "error" => LevelFilter::ERROR,
        "warning" | "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => return Err(anyhow!("invalid log level: {}", s)),
    })
}
