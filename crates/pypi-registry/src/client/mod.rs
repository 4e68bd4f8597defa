//! HTTP client for the PyPI JSON API project and release endpoints

use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;

use crate::api::Response;
use crate::RegistryResult;
use pypi_core::error::PypiError;

/// Root endpoint of the PyPI JSON API
const DEFAULT_BASE_URL: &str = "https://pypi.org/pypi";

/// HTTP client for PyPI project and release metadata lookups
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base registry URL
    base_url: String,
}

impl RegistryClient {
    /// Create a registry client with a default HTTP transport.
    ///
    /// No request timeout is configured; callers that need one should build
    /// their own [`reqwest::Client`] and use [`RegistryClient::with_client`].
    pub fn new() -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent("pypi-registry/0.1.0")
            .build()
            .map_err(|e| PypiError::network("Failed to create HTTP client".to_string(), e))?;

        Ok(Self::with_client(client))
    }

    /// Create a registry client around a caller-configured HTTP transport.
    ///
    /// Timeouts, proxies, and TLS settings all belong to the supplied client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Fetch project metadata: GET `{root}/{name}/json`.
    ///
    /// `name` must be a non-empty, URL-safe package identifier; it is
    /// interpolated into the path without escaping.
    pub async fn project(&self, name: &str) -> RegistryResult<Response> {
        let url = format!("{}/{}/json", self.base_url, name);
        self.get_json(
            &url,
            PypiError::ProjectNotFound {
                name: name.to_string(),
            },
        )
        .await
    }

    /// Fetch metadata for one release: GET `{root}/{name}/{version}/json`.
    ///
    /// Same constraints as [`RegistryClient::project`], plus a non-empty
    /// `version` identifier.
    pub async fn release(&self, name: &str, version: &str) -> RegistryResult<Response> {
        let url = format!("{}/{}/{}/json", self.base_url, name, version);
        self.get_json(
            &url,
            PypiError::ReleaseNotFound {
                name: name.to_string(),
                version: version.to_string(),
            },
        )
        .await
    }

    /// Issue the GET and decode the body, mapping 404 to `not_found`
    async fn get_json(&self, url: &str, not_found: PypiError) -> RegistryResult<Response> {
        debug!(%url, "fetching package metadata");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PypiError::network(format!("Failed to fetch {}", url), e))?;

        match response.status() {
            StatusCode::OK => {
                // Read the body in full before decoding so transport and
                // decode failures stay distinct error kinds
                let body = response
                    .text()
                    .await
                    .map_err(|e| PypiError::network(format!("Failed to read body of {}", url), e))?;

                serde_json::from_str(&body).map_err(|e| PypiError::Decode {
                    message: e.to_string(),
                })
            },
            StatusCode::NOT_FOUND => Err(not_found),
            status => Err(PypiError::Network {
                message: format!("Registry returned status {} for {}", status, url),
                source: None,
            }),
        }
    }
}
