//! Configuration module for the dashboard cache.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote job-portal API (fixed at startup)
    pub api_base_url: String,
    /// How long a cached snapshot is served without revalidation
    pub freshness_window: Duration,
    /// Upper bound on one full retrieval protocol run
    pub fetch_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Access token used by the smoke binary to seed the session store
    pub api_token: Option<String>,
    /// Logged-in user record (JSON) used by the smoke binary
    pub user_json: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("JOBDESK_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());

        let freshness_window = env::var("JOBDESK_FRESHNESS_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(300));

        let fetch_timeout = env::var("JOBDESK_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let log_level = env::var("JOBDESK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let api_token = env::var("JOBDESK_API_TOKEN").ok();
        let user_json = env::var("JOBDESK_USER_JSON").ok();

        Self {
            api_base_url,
            freshness_window,
            fetch_timeout,
            log_level,
            api_token,
            user_json,
        }
    }
}
