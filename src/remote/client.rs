//! HTTP client for the Nova dataset service
//!
//! A thin blocking facade over the five service operations. Every request
//! carries the bearer token in the `Auth-Token` header; a missing remote
//! URL or token is a local failure raised before any network attempt. Each
//! operation is attempted exactly once, no retries.

use crate::config::store::Configuration;
use crate::core::error::{NovaError, Result};
use crate::core::types::DatasetId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Header carrying the bearer token
pub const AUTH_HEADER: &str = "Auth-Token";

const USER_AGENT: &str = concat!("nova-cli/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Optional fields of dataset creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOptions {
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path hint shown by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateDatasetRequest<'a> {
    collection: &'a str,
    name: &'a str,
    #[serde(flatten)]
    options: &'a CreateOptions,
}

/// One row of a search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Account owning the collection
    pub owner: String,
    /// Collection name
    pub collection: String,
    /// Dataset name
    pub name: String,
}

/// One row of the dataset listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Dataset name
    pub name: String,
    /// Collection name, if the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Description, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp, if the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Blocking client for one resolved remote/token pair.
#[derive(Debug)]
pub struct RemoteClient {
    http: reqwest::blocking::Client,
    remote: String,
    token: String,
}

impl RemoteClient {
    /// Build a client from the effective configuration.
    ///
    /// Fails if `core.remote` or `core.token` is missing or empty.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let remote = config.require_core("remote")?.trim_end_matches('/');
        let token = config.require_core("token")?;

        if remote.is_empty() {
            return Err(NovaError::missing_config_key("remote"));
        }
        if token.is_empty() {
            return Err(NovaError::missing_config_key("token"));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NovaError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            remote: remote.to_string(),
            token: token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.remote, path)
    }

    fn data_url(&self, id: &DatasetId) -> String {
        format!(
            "{}/api/datasets/{}/{}/data",
            self.remote, id.collection, id.name
        )
    }

    /// Create a dataset on the service.
    pub fn create_dataset(&self, id: &DatasetId, options: &CreateOptions) -> Result<()> {
        let url = self.url("/api/datasets");
        debug!(%url, dataset = %id, "creating dataset");

        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &self.token)
            .json(&CreateDatasetRequest {
                collection: &id.collection,
                name: &id.name,
                options,
            })
            .send()
            .map_err(|e| NovaError::network(e.to_string()))?;

        expect_success(response)?;
        Ok(())
    }

    /// Upload a packed snapshot.
    pub fn push_data(&self, id: &DatasetId, bytes: Vec<u8>) -> Result<()> {
        let url = self.data_url(id);
        debug!(%url, bytes = bytes.len(), "pushing snapshot");

        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/gzip")
            .body(bytes)
            .send()
            .map_err(|e| NovaError::network(e.to_string()))?;

        expect_success(response)?;
        Ok(())
    }

    /// Download the current snapshot of a dataset.
    pub fn clone_data(&self, id: &DatasetId) -> Result<Vec<u8>> {
        let url = self.data_url(id);
        debug!(%url, "downloading snapshot");

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .map_err(|e| NovaError::network(e.to_string()))?;

        let response = expect_success(response)?;
        let bytes = response
            .bytes()
            .map_err(|e| NovaError::network(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    /// Search datasets across collections.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let response = self
            .http
            .get(self.url("/api/search"))
            .query(&[("q", query)])
            .header(AUTH_HEADER, &self.token)
            .send()
            .map_err(|e| NovaError::network(e.to_string()))?;

        let response = expect_success(response)?;
        response
            .json()
            .map_err(|e| NovaError::network(format!("Failed to parse search results: {}", e)))
    }

    /// List the caller's datasets.
    pub fn list_datasets(&self) -> Result<Vec<DatasetSummary>> {
        let response = self
            .http
            .get(self.url("/api/datasets"))
            .header(AUTH_HEADER, &self.token)
            .send()
            .map_err(|e| NovaError::network(e.to_string()))?;

        let response = expect_success(response)?;
        response
            .json()
            .map_err(|e| NovaError::network(format!("Failed to parse dataset listing: {}", e)))
    }
}

/// Pass a successful response through, turn anything else into an API error
/// with a message extracted from the body.
fn expect_success(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(NovaError::api(api_error_message(status.as_u16(), &body)))
}

/// Extract a human-readable message from an error response body: the JSON
/// `error` field, falling back to `message`, falling back to the status.
fn api_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["error", "message"] {
            if let Some(message) = value.get(field).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    format!("HTTP {}", status)
}
