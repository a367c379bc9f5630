//! Typed HTTP client for the job-portal backend.

use std::time::Duration;

use serde_json::Value;

use super::unwrap_data;
use crate::errors::CacheError;
use crate::models::{DashboardAnalytics, JobPosting};

/// Thin wrapper over reqwest for the four endpoints the cache consumes.
///
/// Every request carries a bearer token; the token is passed per call rather
/// than stored so the client can outlive a login session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given API base URL.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, CacheError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /hra/dashboard - primary dashboard analytics.
    ///
    /// Authoritative for counts, and for the recent lists when the backend
    /// includes them.
    pub async fn dashboard_analytics(&self, token: &str) -> Result<DashboardAnalytics, CacheError> {
        let body = self.get_json("/hra/dashboard", token).await?;
        unwrap_data(body)
    }

    /// GET /hra/analytics - raw jobs list from the "all analytics" payload.
    ///
    /// Used only as a fallback source for job postings.
    pub async fn all_analytics_jobs(&self, token: &str) -> Result<Vec<JobPosting>, CacheError> {
        let body = self.get_json("/hra/analytics", token).await?;
        unwrap_data(body)
    }

    /// GET /jobs/hra/{id} - jobs posted by a specific HR user.
    pub async fn jobs_by_hr(&self, token: &str, hr_id: &str) -> Result<Vec<JobPosting>, CacheError> {
        let body = self.get_json(&format!("/jobs/hra/{}", hr_id), token).await?;
        unwrap_data(body)
    }

    /// GET /jobs/created - unscoped list of all created jobs (last resort).
    pub async fn all_created_jobs(&self, token: &str) -> Result<Vec<JobPosting>, CacheError> {
        let body = self.get_json("/jobs/created", token).await?;
        unwrap_data(body)
    }

    async fn get_json(&self, path: &str, token: &str) -> Result<Value, CacheError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(CacheError::from)
    }
}
