//! HTTP client for the remote candidate store.
//!
//! The store is a plain collection-style resource: `GET /candidates`,
//! `GET/PATCH/DELETE /candidates/{id}`, `POST /candidates`, plus `q` and
//! `status` query filters. Each method here issues exactly one exchange,
//! after the optional artificial delay from [`crate::delay`].

use async_trait::async_trait;
use tracing::debug;

use hireline_shared::{Candidate, CandidateDraft, CandidateId, CandidatePatch, StatusFilter};

use crate::config::ApiConfig;
use crate::delay::pace;
use crate::error::{ApiError, Result};

/// Remote operations on the candidate collection.
///
/// The store layer consumes this trait instead of the concrete client so
/// tests can inject an in-memory double.
#[async_trait]
pub trait CandidateApi: Send + Sync {
    /// Fetch every candidate.
    async fn fetch_all(&self) -> Result<Vec<Candidate>>;

    /// Fetch a single candidate. Callers treat any failure as "not found".
    async fn fetch_by_id(&self, id: CandidateId) -> Result<Candidate>;

    /// Create a candidate; the store assigns and echoes the identifier.
    async fn create(&self, draft: &CandidateDraft) -> Result<Candidate>;

    /// Apply a partial update; the store returns the full updated record.
    async fn update(&self, id: CandidateId, patch: &CandidatePatch) -> Result<Candidate>;

    /// Delete a candidate.
    async fn delete(&self, id: CandidateId) -> Result<()>;

    /// Server-side substring search against name, email and position.
    async fn search(&self, query: &str) -> Result<Vec<Candidate>>;

    /// Server-side status filter. The filter's wire value is forwarded
    /// verbatim, `"all"` included; interpreting it is the remote query
    /// processor's business.
    async fn fetch_by_status(&self, filter: StatusFilter) -> Result<Vec<Candidate>>;
}

/// `reqwest`-backed implementation of [`CandidateApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL; a trailing slash is fine.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration, applying its delay setting.
    pub fn from_config(config: &ApiConfig) -> Self {
        crate::delay::set_api_delay(config.delay_ms);
        Self::new(config.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl CandidateApi for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<Candidate>> {
        pace().await;
        let url = self.url("/candidates");
        debug!(url = %url, "Fetching all candidates");
        let resp = Self::check(self.http.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn fetch_by_id(&self, id: CandidateId) -> Result<Candidate> {
        pace().await;
        let url = self.url(&format!("/candidates/{id}"));
        debug!(url = %url, "Fetching candidate");
        let resp = Self::check(self.http.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn create(&self, draft: &CandidateDraft) -> Result<Candidate> {
        pace().await;
        let url = self.url("/candidates");
        debug!(url = %url, name = %draft.name, "Creating candidate");
        let resp = Self::check(self.http.post(&url).json(draft).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn update(&self, id: CandidateId, patch: &CandidatePatch) -> Result<Candidate> {
        pace().await;
        let url = self.url(&format!("/candidates/{id}"));
        debug!(url = %url, "Updating candidate");
        let resp = Self::check(self.http.patch(&url).json(patch).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn delete(&self, id: CandidateId) -> Result<()> {
        pace().await;
        let url = self.url(&format!("/candidates/{id}"));
        debug!(url = %url, "Deleting candidate");
        Self::check(self.http.delete(&url).send().await?)?;
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        pace().await;
        let url = self.url("/candidates");
        debug!(url = %url, query = %query, "Searching candidates");
        let resp = Self::check(self.http.get(&url).query(&[("q", query)]).send().await?)?;
        Ok(resp.json().await?)
    }

    async fn fetch_by_status(&self, filter: StatusFilter) -> Result<Vec<Candidate>> {
        pace().await;
        let url = self.url("/candidates");
        debug!(url = %url, status = %filter, "Fetching candidates by status");
        let resp = Self::check(
            self.http
                .get(&url)
                .query(&[("status", filter.as_str())])
                .send()
                .await?,
        )?;
        Ok(resp.json().await?)
    }
}
