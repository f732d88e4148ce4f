//! Response bodies returned by the submission relay

use serde::{Deserialize, Serialize};

/// `{"success": true}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySuccessBody {
    pub success: bool,
}

impl Default for RelaySuccessBody {
    fn default() -> Self {
        Self { success: true }
    }
}

/// `{"error": "..."}`. The message never carries destination details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayFailureBody {
    pub error: String,
}

impl RelayFailureBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
