//! Equipment API client
//!
//! A thin async wrapper over the equipment CRUD endpoints. Every method
//! funnels through one request path so transport failures, non-success
//! statuses, and undecodable bodies map to `ApiError` the same way
//! everywhere.
//!
//! Error bodies are expected to carry a JSON `{"detail": ...}` message;
//! extraction is best-effort and absence falls back to the status alone.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use kitbase_core::{
    ApiError, ApiResult, Equipment, EquipmentCreate, EquipmentId, EquipmentUpdate, EquipmentsPage,
    Message,
};

use crate::config::ClientConfig;

/// Request timeout applied to every call
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size requested when the caller does not specify one
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Async client for the equipment catalog endpoints
#[derive(Debug, Clone)]
pub struct EquipmentsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EquipmentsClient {
    /// Create a client from the resolved configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Self::with_base_url(&config.base_url)
    }

    /// Create a client pointing at an explicit base URL
    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client talks to, without the API prefix
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    // ========================================================================
    // Equipment CRUD
    // ========================================================================

    /// Fetch one page of the equipment listing
    ///
    /// The envelope's `count` is the total catalog size regardless of the
    /// requested window.
    pub async fn list(&self, skip: usize, limit: usize) -> ApiResult<EquipmentsPage> {
        let request = self
            .http
            .get(self.url("/equipments/"))
            .query(&[("skip", skip), ("limit", limit)]);
        self.execute(request).await
    }

    /// Fetch a single equipment record by id
    pub async fn get(&self, id: EquipmentId) -> ApiResult<Equipment> {
        let request = self.http.get(self.url(&format!("/equipments/{id}")));
        self.execute(request).await
    }

    /// Create a new equipment record
    pub async fn create(&self, payload: &EquipmentCreate) -> ApiResult<Equipment> {
        let request = self.http.post(self.url("/equipments/")).json(payload);
        self.execute(request).await
    }

    /// Partially update an existing record
    ///
    /// Only the fields set on `payload` are sent; the response carries the
    /// authoritative post-update record.
    pub async fn update(&self, id: EquipmentId, payload: &EquipmentUpdate) -> ApiResult<Equipment> {
        let request = self
            .http
            .put(self.url(&format!("/equipments/{id}")))
            .json(payload);
        self.execute(request).await
    }

    /// Delete an equipment record
    pub async fn delete(&self, id: EquipmentId) -> ApiResult<Message> {
        let request = self.http.delete(self.url(&format!("/equipments/{id}")));
        self.execute(request).await
    }

    // ========================================================================
    // Request Execution
    // ========================================================================

    /// Send a request and decode the JSON response
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status().as_u16();
        let url = response.url().clone();
        let body = response.text().await.map_err(transport_error)?;
        debug!("{status} <- {url}");

        if !(200..300).contains(&status) {
            let error = status_error(status, &body);
            warn!("Request to {url} failed: {error} ({})", error.user_message());
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Shape of the server's error bodies
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Map a reqwest failure to the transport side of the taxonomy
fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::network(e.to_string())
    }
}

/// Build a status error, extracting the server detail when present
fn status_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::status_with_detail(status, parsed.detail),
        Err(_) => ApiError::status(status),
    }
}

// ============================================================================
// Tests
// ============================================================================
