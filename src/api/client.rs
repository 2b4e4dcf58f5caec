use std::time::Duration;

use reqwest::{Client as HttpClient, Url};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::settings::ApiSettings;
use crate::models::NewTransaction;

/// Errors returned by the transactions API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for the dt-money transactions API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from the `api` section of the settings
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// POST /transactions
    ///
    /// Sends the transaction as JSON. The response body is not read on
    /// success; any non-2xx status becomes [`ApiError::Status`].
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        let url = self.endpoint("transactions")?;
        debug!("POST {} ({})", url, transaction);

        let response = self.http_client.post(url).json(transaction).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!("Transaction accepted with status {}", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Transactions API returned {}: {}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Parse the configured base URL, treating its path as a directory
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
