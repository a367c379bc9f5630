//! Job posting model matching the backend job payloads.

use serde::{Deserialize, Serialize};

/// One job posting as returned by any of the job-list endpoints.
///
/// The backend serves several shapes of job record depending on the endpoint
/// (analytics payload, jobs-by-HR, unscoped all-jobs). Only the fields the
/// dashboard renders are kept; everything else is ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Backend identifier; string or number on the wire, kept as-is
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, alias = "jobTitle")]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "jobType")]
    pub employment_type: String,
    #[serde(default, alias = "createdAt")]
    pub posted_at: Option<String>,
    #[serde(default, alias = "noOfApplicants")]
    pub applicant_count: u64,
}

/// Accept both `"id": "101"` and `"id": 101` from the backend.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
