//! Dashboard data cache.
//!
//! Owns the fetched snapshot and its freshness state, serves cached results
//! within the freshness window, and coordinates a single in-flight fetch.
//! Errors never cross this boundary: failures are recorded as a readable
//! last-error string and consumers keep seeing the previous snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::errors::CacheError;
use crate::models::{resolve_hr_id, DashboardSnapshot, JobApplication, JobPosting};
use crate::session::SessionStore;

/// Cap on the optimistically maintained recent-jobs list.
const RECENT_JOBS_CAP: usize = 10;

/// Result of one `fetch` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Cached snapshot was inside the freshness window; no network I/O
    Fresh,
    /// A new snapshot was fetched and stored
    Updated,
    /// Another fetch was already in flight; this call did nothing
    AlreadyInFlight,
    /// The retrieval protocol failed; error recorded, prior snapshot kept
    Failed,
}

#[derive(Debug, Default)]
struct CacheState {
    snapshot: Option<DashboardSnapshot>,
    last_fetched_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

/// The HR dashboard cache service.
///
/// Constructed once per session and shared by reference with every consumer;
/// consumers read through the accessors and mutate only via
/// [`DashboardCache::apply_posted_job`] and [`DashboardCache::clear`].
pub struct DashboardCache {
    api: ApiClient,
    session: Arc<dyn SessionStore>,
    state: Mutex<CacheState>,
    in_flight: AtomicBool,
    freshness_window: Duration,
    fetch_timeout: Duration,
}

impl DashboardCache {
    pub fn new(
        api: ApiClient,
        session: Arc<dyn SessionStore>,
        freshness_window: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(CacheState::default()),
            in_flight: AtomicBool::new(false),
            freshness_window,
            fetch_timeout,
        }
    }

    /// Fetch dashboard data, serving the cached snapshot when it is fresh.
    ///
    /// At most one retrieval protocol runs at a time: the in-flight guard is
    /// taken with a synchronous compare-exchange before any await point, and a
    /// caller that loses the race returns [`FetchOutcome::AlreadyInFlight`]
    /// without scheduling any network work.
    pub async fn fetch(&self, force: bool) -> FetchOutcome {
        if !force && self.is_fresh() {
            tracing::debug!("dashboard cache hit, serving snapshot");
            return FetchOutcome::Fresh;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("dashboard fetch already in flight, skipping");
            return FetchOutcome::AlreadyInFlight;
        }

        let fetch_id = Uuid::new_v4();
        tracing::info!(%fetch_id, force, "fetching dashboard data");

        // The whole protocol runs under a timeout so a connection that never
        // settles cannot leave the guard set and starve future refreshes.
        let outcome = match tokio::time::timeout(self.fetch_timeout, self.load_snapshot(fetch_id))
            .await
        {
            Ok(Ok(snapshot)) => {
                let mut state = self.lock_state();
                state.snapshot = Some(snapshot);
                state.last_fetched_at = Some(Utc::now());
                state.last_error = None;
                tracing::info!(%fetch_id, "dashboard snapshot updated");
                FetchOutcome::Updated
            }
            Ok(Err(err)) => {
                self.record_failure(fetch_id, &err);
                FetchOutcome::Failed
            }
            Err(_) => {
                let err = CacheError::Timeout {
                    secs: self.fetch_timeout.as_secs(),
                };
                self.record_failure(fetch_id, &err);
                FetchOutcome::Failed
            }
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// Force a refetch regardless of freshness.
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetch(true).await
    }

    /// Discard the snapshot, freshness timestamp, and last error (logout path).
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.snapshot = None;
        state.last_fetched_at = None;
        state.last_error = None;
        tracing::info!("dashboard cache cleared");
    }

    /// Reflect a just-posted job ahead of the next refetch.
    pub fn apply_posted_job(&self, job: JobPosting) {
        let mut state = self.lock_state();
        let snapshot = state.snapshot.get_or_insert_with(DashboardSnapshot::default);
        snapshot.total_posted_jobs += 1;
        snapshot.recent_jobs.insert(0, job);
        snapshot.recent_jobs.truncate(RECENT_JOBS_CAP);
    }

    pub fn total_posted_jobs(&self) -> u64 {
        self.lock_state()
            .snapshot
            .as_ref()
            .map_or(0, |s| s.total_posted_jobs)
    }

    pub fn total_applied_candidates(&self) -> u64 {
        self.lock_state()
            .snapshot
            .as_ref()
            .map_or(0, |s| s.total_applied_candidates)
    }

    pub fn total_bulk_hiring_requests(&self) -> u64 {
        self.lock_state()
            .snapshot
            .as_ref()
            .map_or(0, |s| s.total_bulk_hiring_requests)
    }

    pub fn recent_jobs(&self) -> Vec<JobPosting> {
        self.lock_state()
            .snapshot
            .as_ref()
            .map(|s| s.recent_jobs.clone())
            .unwrap_or_default()
    }

    pub fn recent_applications(&self) -> Vec<JobApplication> {
        self.lock_state()
            .snapshot
            .as_ref()
            .map(|s| s.recent_applications.clone())
            .unwrap_or_default()
    }

    /// Message of the most recent failed fetch, if the last fetch failed.
    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.lock_state().last_fetched_at
    }

    fn is_fresh(&self) -> bool {
        let state = self.lock_state();
        match (&state.snapshot, state.last_fetched_at) {
            (Some(_), Some(at)) => {
                let age = Utc::now().signed_duration_since(at);
                age.to_std()
                    .map(|age| age < self.freshness_window)
                    .unwrap_or(true)
            }
            _ => false,
        }
    }

    /// Run the retrieval protocol and build the next snapshot.
    async fn load_snapshot(&self, fetch_id: Uuid) -> Result<DashboardSnapshot, CacheError> {
        let token = self.session.access_token().ok_or(CacheError::MissingAuth)?;

        // Primary analytics call: authoritative for counts and recent lists.
        let analytics = self.api.dashboard_analytics(&token).await?;

        // Secondary raw jobs list, only ever used as a fallback source. Its
        // failure alone must not fail the protocol.
        let raw_jobs = match self.api.all_analytics_jobs(&token).await {
            Ok(jobs) => jobs,
            Err(err) => {
                tracing::warn!(%fetch_id, error = %err, "all-analytics fallback source unavailable");
                Vec::new()
            }
        };

        let recent_jobs = if !analytics.latest_posted_jobs.is_empty() {
            // Tier (a): already scoped to the current HR user by the backend.
            analytics.latest_posted_jobs.clone()
        } else if let Some(hr_id) = self.session.current_user().and_then(|u| resolve_hr_id(&u)) {
            // Tier (b): ask for this HR user's jobs explicitly.
            tracing::debug!(%fetch_id, %hr_id, "analytics job list empty, fetching jobs by HR id");
            self.api.jobs_by_hr(&token, &hr_id).await?
        } else if !raw_jobs.is_empty() {
            // Tier (c): unscoped raw list from the all-analytics payload.
            tracing::warn!(%fetch_id, "no HR id resolvable, using unscoped analytics job list");
            raw_jobs
        } else {
            tracing::warn!(%fetch_id, "no HR id resolvable, falling back to unscoped all-jobs endpoint");
            self.api.all_created_jobs(&token).await?
        };

        Ok(analytics.into_snapshot(recent_jobs))
    }

    fn record_failure(&self, fetch_id: Uuid, err: &CacheError) {
        tracing::error!(%fetch_id, error = %err, "dashboard fetch failed");
        let mut state = self.lock_state();
        state.last_error = Some(err.message());
        // Keep a stale snapshot over a blank dashboard; install the placeholder
        // only when there is nothing to preserve.
        if state.snapshot.is_none() {
            state.snapshot = Some(DashboardSnapshot::default());
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
