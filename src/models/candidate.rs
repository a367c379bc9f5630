//! Application (candidate) model for the recent-activity list.

use serde::{Deserialize, Serialize};

/// One recent application as included in the dashboard analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "applicantName", alias = "name")]
    pub candidate_name: String,
    #[serde(default, alias = "jobTitle")]
    pub job_title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, alias = "createdAt")]
    pub applied_at: Option<String>,
}
