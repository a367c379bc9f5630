//! Dashboard snapshot and the analytics wire payload it is built from.

use serde::{Deserialize, Serialize};

use super::{JobApplication, JobPosting};

/// The last successfully fetched view of an HR user's recruiting activity.
///
/// Replaced wholesale on every successful refetch; `Default` is the all-zero
/// placeholder served before the first fetch and after a failed first fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_posted_jobs: u64,
    pub total_applied_candidates: u64,
    pub total_bulk_hiring_requests: u64,
    pub recent_jobs: Vec<JobPosting>,
    pub recent_applications: Vec<JobApplication>,
}

/// Payload of the primary dashboard-analytics endpoint.
///
/// The backend is loose about which fields it includes; everything defaults so
/// an empty-but-successful response decodes to zero counts and empty lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    #[serde(default)]
    pub total_posted_jobs: u64,
    #[serde(default, alias = "totalApplicants")]
    pub total_applied_candidates: u64,
    #[serde(default, alias = "totalBulkHiring")]
    pub total_bulk_hiring_requests: u64,
    #[serde(default)]
    pub latest_posted_jobs: Vec<JobPosting>,
    #[serde(default, alias = "latestAppliedCandidates")]
    pub latest_applications: Vec<JobApplication>,
}

impl DashboardAnalytics {
    /// Build a snapshot from this payload plus the resolved job list.
    ///
    /// The job list is passed in separately because it may come from a
    /// fallback endpoint rather than `latest_posted_jobs`.
    pub fn into_snapshot(self, recent_jobs: Vec<JobPosting>) -> DashboardSnapshot {
        DashboardSnapshot {
            total_posted_jobs: self.total_posted_jobs,
            total_applied_candidates: self.total_applied_candidates,
            total_bulk_hiring_requests: self.total_bulk_hiring_requests,
            recent_jobs,
            recent_applications: self.latest_applications,
        }
    }
}
