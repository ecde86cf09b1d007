//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive
    /// Example: acesso=debug,info
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            log_filter: std::env::var("LOG_FILTER").ok(),
        }
    }

    /// Check if a log filter is configured
    pub fn has_log_filter(&self) -> bool {
        self.log_filter.is_some()
    }

    /// Filter directive for the tracing subscriber, defaulting to `info`
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
