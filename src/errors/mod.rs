//! Error handling module for the dashboard cache.
//!
//! Errors are swallowed at the cache boundary and surfaced to consumers as a
//! readable last-error string; these types exist for the layers below it.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const BAD_STATUS: &str = "BAD_STATUS";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const TIMEOUT: &str = "TIMEOUT";
}

/// Cache/client error type.
#[derive(Debug)]
pub enum CacheError {
    /// No access token in the session store
    MissingAuth,
    /// Transport-level failure (connect, TLS, body read)
    Network(String),
    /// The backend answered with a non-success HTTP status
    Status { endpoint: String, status: u16 },
    /// The response body did not match the expected envelope or payload shape
    Decode(String),
    /// The retrieval protocol exceeded its time budget
    Timeout { secs: u64 },
}

impl CacheError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            CacheError::MissingAuth => codes::UNAUTHORIZED,
            CacheError::Network(_) => codes::NETWORK_ERROR,
            CacheError::Status { .. } => codes::BAD_STATUS,
            CacheError::Decode(_) => codes::DECODE_ERROR,
            CacheError::Timeout { .. } => codes::TIMEOUT,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            CacheError::MissingAuth => "No access token in session, please log in".to_string(),
            CacheError::Network(msg) => msg.clone(),
            CacheError::Status { endpoint, status } => {
                format!("{} returned HTTP {}", endpoint, status)
            }
            CacheError::Decode(msg) => msg.clone(),
            CacheError::Timeout { secs } => {
                format!("Dashboard fetch did not settle within {}s", secs)
            }
        }
    }
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for CacheError {}

impl From<reqwest::Error> for CacheError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Network error: {:?}", err);
        CacheError::Network(format!("Network error: {}", err))
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        CacheError::Decode(format!("JSON error: {}", err))
    }
}
