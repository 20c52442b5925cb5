use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Mallika Assist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public hospital API serving the department and doctor directory.
pub const DEFAULT_API_BASE_URL: &str = "https://mallika-hospital.onrender.com/api";

/// Directory cache freshness window.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Per-request HTTP timeout against the hospital API.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,mallika_assist=debug".to_string()
}

/// Runtime configuration for the assistant engine.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Base URL of the hospital REST API (no trailing slash required).
    pub api_base_url: String,
    /// How long a fetched directory snapshot stays fresh.
    pub cache_ttl: Duration,
    /// Timeout for each directory request.
    pub http_timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl AssistantConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// `MALLIKA_API_BASE_URL` overrides the API base URL and
    /// `MALLIKA_CACHE_TTL_SECS` overrides the cache TTL (seconds).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("MALLIKA_API_BASE_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }
        if let Some(ttl) = parse_ttl_secs(std::env::var("MALLIKA_CACHE_TTL_SECS").ok()) {
            config.cache_ttl = ttl;
        }
        config
    }
}

/// Parse a TTL override in whole seconds. Rejects zero, negatives,
/// and garbage so a bad env var falls back to the default.
fn parse_ttl_secs(raw: Option<String>) -> Option<Duration> {
    let secs: u64 = raw?.trim().parse().ok()?;
    if secs == 0 {
        return None;
    }
    Some(Duration::from_secs(secs))
}
