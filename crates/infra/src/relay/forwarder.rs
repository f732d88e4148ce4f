//! Webhook forwarder
//!
//! Posts a JSON body to the configured destination exactly once. No
//! validation, transformation, retry, or idempotency control.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use retreat_domain::{RelayConfig, Result, RetreatError};
use tracing::{debug, instrument, warn};
use url::Url;

use super::errors::RelayError;
use crate::http::HttpClient;

/// Forwards submissions to a single webhook URL.
#[derive(Clone)]
pub struct WebhookForwarder {
    client: HttpClient,
    webhook_url: Option<Url>,
}

impl WebhookForwarder {
    /// Create a forwarder. A `None` or blank URL is a valid, unconfigured
    /// forwarder; a malformed URL is a configuration error.
    pub fn new(webhook_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let webhook_url = match webhook_url.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(
                Url::parse(raw)
                    .map_err(|err| RetreatError::Config(format!("invalid webhook URL: {err}")))?,
            ),
            None => None,
        };

        let client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("retreat-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, webhook_url })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Self::new(config.webhook_url.as_deref(), Duration::from_secs(config.timeout_seconds.max(1)))
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Forward `body` byte for byte with a JSON content type.
    #[instrument(skip_all)]
    pub async fn forward(&self, body: Bytes) -> std::result::Result<(), RelayError> {
        let Some(url) = &self.webhook_url else {
            return Err(RelayError::NotConfigured);
        };

        let request = self
            .client
            .request(Method::POST, url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self
            .client
            .send(request)
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "webhook rejected submission");
            return Err(RelayError::DestinationStatus(status.as_u16()));
        }

        debug!(%status, "webhook accepted submission");
        Ok(())
    }
}
