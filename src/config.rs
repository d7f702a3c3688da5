//! Build-time Configuration
//!
//! The frontend has no runtime environment, so everything here is baked in
//! when the wasm bundle is built.

use std::str::FromStr;

use log::LevelFilter;

/// Deployed tasks service
pub const DEFAULT_API_URL: &str = "https://prueba-tecnica-mindora.vercel.app/api";

/// Location of the tasks service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `TASKS_API_URL` at build time, else the deployed service
    pub fn from_build_env() -> Self {
        option_env!("TASKS_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Console log level, from `TASKS_LOG_LEVEL` at build time
pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("TASKS_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_deployed_service() {
        assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://localhost:3000/api//");
        assert_eq!(config.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("chatty")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }
}
