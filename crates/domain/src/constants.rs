//! Application constants
//!
//! Centralized location for user-facing messages, wire formats, and
//! defaults shared across the workspace.

// Identity storage
pub const IDENTITY_KEY: &str = "userName";

// Date formats
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
pub const AVAILABILITY_SEPARATOR: &str = ", ";

// Relay routes and response messages
pub const SUBMIT_ROUTE: &str = "/api/submit";
pub const HEALTH_ROUTE: &str = "/health";
pub const WEBHOOK_NOT_CONFIGURED: &str = "Webhook URL not configured";
pub const SUBMISSION_FAILED: &str = "Failed to submit data";

// Selector notices
pub const PROMPT_ARRIVAL: &str = "Click a date to set your arrival, then click another for departure";
pub const PROMPT_DEPARTURE: &str = "Now select your departure date";
pub const NOTICE_RANGE_ADDED: &str = "Date range added!";
pub const NOTICE_SELECTION_CANCELLED: &str = "Selection cancelled";
pub const NOTICE_SUBMISSION_RETRY: &str = "Something went wrong. Please try again.";

// Configuration defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CUTOFF: (i32, u32, u32) = (2025, 12, 31);
pub const DEFAULT_IDENTITY_PATH: &str = ".retreat/identity.json";
pub const DEFAULT_RELAY_ENDPOINT: &str = "http://127.0.0.1:3000/api/submit";
pub const DEFAULT_LOG_FILTER: &str = "info";
