//! End-to-end submission flow: selector -> service -> HTTP relay client ->
//! relay server -> webhook.

mod support;

use std::sync::Arc;
use std::time::Duration;

use retreat_core::{SubmissionError, SubmissionService};
use retreat_infra::HttpSubmissionRelay;
use serde_json::json;
use support::{clock, selector_with, session, start_relay};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(submit_url: &str) -> SubmissionService {
    let relay = HttpSubmissionRelay::new(submit_url, Duration::from_secs(5))
        .expect("relay client should build");
    SubmissionService::new(Arc::new(relay), clock())
}

#[tokio::test]
async fn submission_reaches_webhook_verbatim() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hooks/catch/42"))
        .and(body_json(json!({
            "name": "Izzy",
            "availability": "2025-07-10 to 2025-07-15, 2025-08-01 to 2025-08-03",
            "totalRanges": 2,
            "submissionDate": "2025-06-01 09:15:00"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&webhook)
        .await;

    let relay = start_relay(Some(&format!("{}/hooks/catch/42", webhook.uri()))).await;
    let service = service_for(&relay.submit_url());

    let selector = selector_with(&[((7, 10), (7, 15)), ((8, 1), (8, 3))]);
    let receipt = service.submit(&session("Izzy"), &selector).await.expect("submitted");

    assert_eq!(receipt.payload.total_ranges(), 2);
    assert_eq!(
        receipt.notice().message,
        "Thank you, Izzy! We'll follow up shortly once the rest of the guys enter their availability."
    );
    assert_eq!(selector.ranges().len(), 2, "ranges are kept after submission");

    relay.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn unconfigured_relay_surfaces_generic_retry_notice() {
    let relay = start_relay(None).await;
    let service = service_for(&relay.submit_url());

    let selector = selector_with(&[((9, 5), (9, 7))]);
    let err = service.submit(&session("Sam"), &selector).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Relay(_)));
    assert_eq!(err.notice().message, "Something went wrong. Please try again.");

    relay.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn failed_submission_can_be_retried_without_reselecting() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&webhook)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&webhook)
        .await;

    let relay = start_relay(Some(&webhook.uri())).await;
    let service = service_for(&relay.submit_url());
    let selector = selector_with(&[((10, 1), (10, 4))]);
    let session = session("Jo");

    assert!(service.submit(&session, &selector).await.is_err());
    assert!(service.submit(&session, &selector).await.is_ok());

    let received = webhook.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, received[1].body);

    relay.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn relay_health_reports_configuration_over_the_socket() {
    let relay = start_relay(Some("https://hooks.example.com/catch/1")).await;

    let body: serde_json::Value = reqwest::get(format!("http://{}/health", relay.local_addr()))
        .await
        .expect("health request")
        .json()
        .await
        .expect("health body");
    assert_eq!(body, json!({"status": "ok", "webhookConfigured": true}));

    relay.shutdown().await.expect("clean shutdown");
}
