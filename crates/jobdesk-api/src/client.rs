//! HTTP client for the jobs REST backend.

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{ApiError, FilterState, Job, JobPayload, Operation};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// `{data: T}` envelope wrapping every successful payload.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// `{data: [T]}` envelope; a missing `data` reads as an empty list.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// Error body the backend may attach to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the jobs backend.
///
/// Each method issues exactly one request. There are no retries, no caching
/// and no auth headers. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct JobsClient {
    http: Client,
    base_url: String,
}

impl JobsClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent(concat!("jobdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self::with_http_client(http, base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /jobs`, with every non-empty filter as a query parameter.
    pub async fn list_jobs(&self, filters: &FilterState) -> Result<Vec<Job>, ApiError> {
        let request = self.http.get(self.url("/jobs")).query(&filters.query_pairs());
        let response = self.send(Operation::ListJobs, request).await?;
        read_list(Operation::ListJobs, response).await
    }

    /// `GET /jobs/{id}`.
    pub async fn get_job(&self, id: i64) -> Result<Job, ApiError> {
        let request = self.http.get(self.url(&format!("/jobs/{id}")));
        let response = self.send(Operation::GetJob, request).await?;
        read_data(Operation::GetJob, response).await
    }

    /// `POST /jobs`.
    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, ApiError> {
        let request = self.http.post(self.url("/jobs")).json(payload);
        let response = self.send(Operation::CreateJob, request).await?;
        read_data(Operation::CreateJob, response).await
    }

    /// `PUT /jobs/{id}`.
    pub async fn update_job(&self, id: i64, payload: &JobPayload) -> Result<Job, ApiError> {
        let request = self.http.put(self.url(&format!("/jobs/{id}"))).json(payload);
        let response = self.send(Operation::UpdateJob, request).await?;
        read_data(Operation::UpdateJob, response).await
    }

    /// `DELETE /jobs/{id}`. Any 2xx counts as success; the body is ignored.
    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/jobs/{id}")));
        self.send(Operation::DeleteJob, request).await?;
        Ok(())
    }

    /// `GET /jobs/job-types`.
    pub async fn job_types(&self) -> Result<Vec<String>, ApiError> {
        self.lookup(Operation::ListJobTypes, "/jobs/job-types").await
    }

    /// `GET /jobs/locations`.
    pub async fn locations(&self) -> Result<Vec<String>, ApiError> {
        self.lookup(Operation::ListLocations, "/jobs/locations").await
    }

    /// `GET /jobs/tags`.
    pub async fn tags(&self) -> Result<Vec<String>, ApiError> {
        self.lookup(Operation::ListTags, "/jobs/tags").await
    }

    /// `GET /health`. Any 2xx means the backend is reachable.
    pub async fn health_check(&self) -> Result<(), ApiError> {
        let request = self.http.get(self.url("/health"));
        self.send(Operation::HealthCheck, request).await?;
        Ok(())
    }

    async fn lookup(&self, operation: Operation, path: &str) -> Result<Vec<String>, ApiError> {
        let request = self.http.get(self.url(path));
        let response = self.send(operation, request).await?;
        read_list(operation, response).await
    }

    /// Send a request and turn transport failures and non-2xx statuses into
    /// [`ApiError`].
    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::network(operation, e))?;
        debug!(method = %request.method(), url = %request.url(), "API request");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(?operation, error = %e, "API request failed");
            ApiError::network(operation, e)
        })?;

        let status = response.status();
        debug!(?operation, status = status.as_u16(), "API response");

        if status.is_success() {
            return Ok(response);
        }

        // A body that is not the expected shape just means no server message
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        let err = ApiError::server(operation, status.as_u16(), message);
        warn!(?operation, status = status.as_u16(), error = %err, "API error");
        Err(err)
    }
}

async fn read_data<T: DeserializeOwned>(operation: Operation, response: Response) -> Result<T, ApiError> {
    response
        .json::<DataEnvelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| {
            warn!(?operation, error = %e, "failed to decode API response");
            ApiError::decode(operation, e)
        })
}

async fn read_list<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
) -> Result<Vec<T>, ApiError> {
    response
        .json::<ListEnvelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| {
            warn!(?operation, error = %e, "failed to decode API response");
            ApiError::decode(operation, e)
        })
}
