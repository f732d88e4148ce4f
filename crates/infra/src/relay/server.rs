//! HTTP surface of the submission relay.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use retreat_domain::constants::{HEALTH_ROUTE, SUBMIT_ROUTE};
use retreat_domain::{RelaySuccessBody, Result, RetreatError};
use serde::de::IgnoredAny;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use super::errors::RelayError;
use super::forwarder::WebhookForwarder;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct RelayState {
    forwarder: Arc<WebhookForwarder>,
}

impl RelayState {
    pub fn new(forwarder: WebhookForwarder) -> Self {
        Self { forwarder: Arc::new(forwarder) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthBody {
    status: &'static str,
    webhook_configured: bool,
}

/// Build the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(SUBMIT_ROUTE, post(handle_submit))
        .route(HEALTH_ROUTE, get(handle_health))
        .with_state(state)
}

async fn handle_submit(
    State(state): State<RelayState>,
    body: Bytes,
) -> std::result::Result<Json<RelaySuccessBody>, RelayError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("relay_submit", %request_id, bytes = body.len());

    async move {
        let outcome = relay(&state, body).await;
        match &outcome {
            Ok(()) => info!("submission relayed"),
            Err(err) => error!(error = %err, "error submitting to webhook"),
        }
        outcome.map(|()| Json(RelaySuccessBody::default()))
    }
    .instrument(span)
    .await
}

/// The body must parse as JSON but is forwarded as the exact bytes received.
async fn relay(state: &RelayState, body: Bytes) -> std::result::Result<(), RelayError> {
    serde_json::from_slice::<IgnoredAny>(&body)
        .map_err(|err| RelayError::InvalidBody(err.to_string()))?;
    state.forwarder.forward(body).await
}

async fn handle_health(State(state): State<RelayState>) -> Json<HealthBody> {
    Json(HealthBody { status: "ok", webhook_configured: state.forwarder.is_configured() })
}

/// Relay server running on a background task.
pub struct RelayServer {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RelayServer {
    /// Bind `addr` (use port 0 for an ephemeral port) and start serving.
    pub async fn start(addr: &str, state: RelayState) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(|err| {
            RetreatError::Network(format!("failed to bind relay server on {addr}: {err}"))
        })?;

        let local_addr = listener
            .local_addr()
            .map_err(|err| RetreatError::Network(format!("failed to determine address: {err}")))?;

        let app = router(state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
            {
                error!("relay server error: {}", err);
            }
        });

        info!(%local_addr, "relay server listening");

        Ok(Self { local_addr, shutdown_tx: Some(shutdown_tx), handle: Some(handle) })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Full URL of the submit endpoint.
    pub fn submit_url(&self) -> String {
        format!("http://{}{}", self.local_addr, SUBMIT_ROUTE)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                if err.is_panic() {
                    return Err(RetreatError::Internal(format!("relay server panicked: {err}")));
                }
            }
        }

        info!("relay server stopped");
        Ok(())
    }
}

impl Drop for RelayServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn state(url: Option<&str>) -> RelayState {
        RelayState::new(WebhookForwarder::new(url, Duration::from_secs(2)).unwrap())
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn submit(body: &str) -> Request<Body> {
        Request::post(SUBMIT_ROUTE)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn unconfigured_destination_returns_configuration_error() {
        let (status, body) = call(router(state(None)), submit(r#"{"name":"Izzy"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Webhook URL not configured"}));
    }

    #[tokio::test]
    async fn malformed_body_is_a_generic_failure_even_when_unconfigured() {
        let (status, body) = call(router(state(None)), submit("{nope")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to submit data"}));
    }

    #[tokio::test]
    async fn destination_success_maps_to_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) =
            call(router(state(Some(&server.uri()))), submit(r#"{"name":"Izzy"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn submitted_bytes_reach_the_webhook_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sent = r#"{"name":"Izzy","availability":"2025-07-10 to 2025-07-15","totalRanges":1,"submissionDate":"2025-06-01 09:15:00"}"#;
        let (status, _) = call(router(state(Some(&server.uri()))), submit(sent)).await;
        assert_eq!(status, StatusCode::OK);

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body, sent.as_bytes());
        assert_eq!(received[0].headers.get("content-type").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn destination_failure_is_not_leaked() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(410).set_body_string("hook deleted"))
            .mount(&server)
            .await;

        let (status, body) = call(router(state(Some(&server.uri()))), submit("{}")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to submit data"}));
    }

    #[tokio::test]
    async fn health_reports_webhook_configuration() {
        let request = Request::get(HEALTH_ROUTE).body(Body::empty()).unwrap();
        let (status, body) = call(router(state(None)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "webhookConfigured": false}));
    }
}
