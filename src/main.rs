//! JobDesk HR dashboard cache.
//!
//! A client-side data cache for the HR dashboard of the JobDesk portal: serves
//! analytics and job listings from memory within a freshness window, keeps at
//! most one fetch in flight, and degrades through fallback job sources when
//! the primary analytics endpoint omits data.
//!
//! The binary is a smoke CLI: it performs one fetch against the configured
//! backend and logs the resulting snapshot.

mod api;
mod cache;
mod config;
mod errors;
mod models;
mod session;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ApiClient;
use cache::{DashboardCache, FetchOutcome};
use config::Config;
use session::MemorySessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting JobDesk dashboard cache smoke run");
    tracing::info!("API base URL: {}", config.api_base_url);
    tracing::info!("Freshness window: {:?}", config.freshness_window);
    tracing::info!("Fetch timeout: {:?}", config.fetch_timeout);

    // Seed the session store from the environment
    let session = Arc::new(MemorySessionStore::new());
    match &config.api_token {
        Some(token) => {
            let user = config
                .user_json
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok());
            session.log_in(token.clone(), user);
        }
        None => {
            tracing::warn!(
                "No API token configured (JOBDESK_API_TOKEN). Fetch will fail with an auth error."
            );
        }
    }

    // Build the client and the cache
    let api = ApiClient::new(&config.api_base_url, config.fetch_timeout)?;
    let dashboard = DashboardCache::new(
        api,
        session,
        config.freshness_window,
        config.fetch_timeout,
    );

    // One fetch, then report what the dashboard would render
    match dashboard.fetch(false).await {
        FetchOutcome::Updated | FetchOutcome::Fresh => {
            tracing::info!(
                posted_jobs = dashboard.total_posted_jobs(),
                applied_candidates = dashboard.total_applied_candidates(),
                bulk_hiring_requests = dashboard.total_bulk_hiring_requests(),
                recent_jobs = dashboard.recent_jobs().len(),
                recent_applications = dashboard.recent_applications().len(),
                "dashboard snapshot"
            );
        }
        FetchOutcome::Failed => {
            tracing::error!(
                error = %dashboard.last_error().unwrap_or_default(),
                "fetch failed; dashboard would render zeroed stats with an inline warning"
            );
        }
        FetchOutcome::AlreadyInFlight => {}
    }

    Ok(())
}
