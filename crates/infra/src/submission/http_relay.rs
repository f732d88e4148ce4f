//! HTTP implementation of the `SubmissionRelay` port
//!
//! Used by front ends to hand a finished payload to the relay endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use retreat_core::SubmissionRelay;
use retreat_domain::{ClientConfig, RelayFailureBody, Result, RetreatError, SubmissionPayload};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::http::HttpClient;

/// Posts submissions to a relay's `/api/submit` endpoint.
pub struct HttpSubmissionRelay {
    client: HttpClient,
    endpoint: Url,
}

impl HttpSubmissionRelay {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| RetreatError::Config(format!("invalid relay endpoint: {err}")))?;
        let client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.relay_endpoint, Duration::from_secs(config.timeout_seconds.max(1)))
    }
}

#[async_trait]
impl SubmissionRelay for HttpSubmissionRelay {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        let request = self.client.request(Method::POST, self.endpoint.clone()).json(payload);
        let response = self.client.send(request).await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "relay accepted submission");
            return Ok(());
        }

        let reason = response
            .json::<RelayFailureBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| "unreadable response body".to_string());
        warn!(%status, %reason, "relay rejected submission");

        Err(RetreatError::Network(format!("relay responded with {status}: {reason}")))
    }
}
