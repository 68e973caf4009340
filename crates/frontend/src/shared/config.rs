//! Dashboard configuration
//!
//! Values are baked in at build time (`trunk build` passes the environment
//! through to `option_env!`) and fall back to the embedded defaults below.

use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the analytics backend, without trailing slash
    pub api_base: String,
    pub log_level: log::Level,
    /// Typing inactivity before the search filter is applied
    pub search_debounce_ms: u32,
    pub max_upload_bytes: u64,
    pub rows_per_page_options: Vec<usize>,
    pub default_rows_per_page: usize,
    pub top_reviewed_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
            search_debounce_ms: 400,
            max_upload_bytes: 10 * 1024 * 1024,
            rows_per_page_options: vec![5, 10, 25, 50],
            default_rows_per_page: 10,
            top_reviewed_limit: 20,
        }
    }
}

impl DashboardConfig {
    /// Build from optional overrides; blank or unparsable values keep the default
    pub fn from_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(normalize_base).filter(|b| !b.is_empty()) {
            config.api_base = base;
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<log::Level>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Full URL for an API path such as `/sales/summary`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

static CONFIG: Lazy<DashboardConfig> = Lazy::new(|| {
    DashboardConfig::from_overrides(
        option_env!("DASHBOARD_API_URL"),
        option_env!("DASHBOARD_LOG_LEVEL"),
    )
});

/// Process-wide configuration
pub fn config() -> &'static DashboardConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_overrides(None, None);
        assert_eq!(config.api_base, "http://localhost:5001/api");
        assert_eq!(config.search_debounce_ms, 400);
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_api_base_override_trims_trailing_slash() {
        let config = DashboardConfig::from_overrides(Some(" https://api.example.com/v1/ "), None);
        assert_eq!(config.api_base, "https://api.example.com/v1");
        assert_eq!(config.url("/sales/trends"), "https://api.example.com/v1/sales/trends");
        assert_eq!(config.url("ratings/list"), "https://api.example.com/v1/ratings/list");
    }

    #[test]
    fn test_blank_overrides_keep_defaults() {
        let config = DashboardConfig::from_overrides(Some("  "), Some("loud"));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_log_level_override() {
        let config = DashboardConfig::from_overrides(None, Some("warn"));
        assert_eq!(config.log_level, log::Level::Warn);
    }
}
