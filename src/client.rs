//! Request construction and dispatch for the job-search backend API.
//!
//! [`ApiClient`] resolves endpoint paths against its configured base URL,
//! appends present-only query parameters, and normalizes non-success
//! responses into [`ApiError`]. Responses stay opaque `serde_json::Value`s;
//! schema validation belongs to the caller.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::endpoint;
use crate::error::ApiError;
use crate::query::{CompanyFilters, JobFilters, QueryPairs};

/// Asynchronous client for the job-search backend REST API.
///
/// Construct one instance at application start and share it by cloning; the
/// client holds no per-request state, so any number of calls may be in
/// flight concurrently. Each call is a single round trip — no retries, no
/// timeout, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let user_agent = format!("jobsearch-client/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ApiError::Configuration(format!("failed to build reqwest client: {e}"))
            })?;

        Ok(Self { config, client })
    }

    /// Issue a GET request and parse the JSON response body.
    ///
    /// Query pairs are appended in insertion order; an empty set leaves the
    /// URL without a query string.
    #[tracing::instrument(
        name = "api_get",
        skip(self, params),
        fields(base_url = %self.config.base_url(), endpoint = %endpoint),
        err
    )]
    pub async fn get(&self, endpoint: &str, params: Option<&QueryPairs>) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url(), endpoint);

        let mut request = self.client.get(&url);
        if let Some(params) = params.filter(|params| !params.is_empty()) {
            request = request.query(params.as_slice());
        }

        let response = request.send().await?;
        Self::read_json(response).await
    }

    /// Issue a POST request and parse the JSON response body.
    ///
    /// When `body` is present it is serialized as JSON and the request
    /// carries `Content-Type: application/json`; when absent, no body and
    /// no content-type header are sent.
    #[tracing::instrument(
        name = "api_post",
        skip(self, body),
        fields(base_url = %self.config.base_url(), endpoint = %endpoint),
        err
    )]
    pub async fn post<B>(&self, endpoint: &str, body: Option<&B>) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url(), endpoint);

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::read_json(response).await
    }

    /// List companies, filtered by the fields the caller set.
    pub async fn companies(&self, filters: &CompanyFilters) -> Result<Value, ApiError> {
        let params = filters.to_pairs();
        self.get(endpoint::COMPANIES, Some(&params)).await
    }

    /// Fetch one company's details by slug.
    pub async fn company_details(&self, slug: &str) -> Result<Value, ApiError> {
        let path = endpoint::render(endpoint::COMPANY_DETAILS, ":slug", slug);
        self.get(&path, None).await
    }

    /// List jobs, filtered by the fields the caller set.
    pub async fn jobs(&self, filters: &JobFilters) -> Result<Value, ApiError> {
        let params = filters.to_pairs();
        self.get(endpoint::JOBS, Some(&params)).await
    }

    /// Fetch reviews for a company, optionally capped at `limit` entries.
    pub async fn company_reviews(
        &self,
        company_name: &str,
        limit: Option<u32>,
    ) -> Result<Value, ApiError> {
        let path = endpoint::render(endpoint::REVIEWS, ":companyName", company_name);
        let mut params = QueryPairs::new();
        params.push_opt("limit", limit.as_ref());
        self.get(&path, Some(&params)).await
    }

    /// List the industries known to the backend.
    pub async fn industries(&self) -> Result<Value, ApiError> {
        self.get(endpoint::INDUSTRIES, None).await
    }

    /// Fetch the backend's root welcome message (liveness probe).
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get(endpoint::ROOT, None).await
    }

    /// Trigger a backend data reload. Sends an empty body.
    pub async fn reload_data(&self) -> Result<Value, ApiError> {
        self.post(endpoint::RELOAD_DATA, None::<&Value>).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        debug!(status = %status, "request completed");

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
