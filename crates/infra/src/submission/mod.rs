//! Submission relay client

pub mod http_relay;

pub use http_relay::HttpSubmissionRelay;
