//! Small response envelopes shared by the REST server and its client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of `POST /orders/{id}/close`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseReceipt {
    pub success: bool,
    pub message: String,
}

impl CloseReceipt {
    pub fn ok(message: impl Into<String>) -> Self {
        CloseReceipt {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        CloseReceipt {
            success: false,
            message: message.into(),
        }
    }
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub gateway_connected: bool,
    pub timestamp: DateTime<Utc>,
}
