// Health-check input: one latency observation tagged with the release it was taken against.

use serde::{Deserialize, Serialize};

/// One observation: seconds since epoch and a query latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: u32,
    pub latency: u16,
}

impl Sample {
    pub fn new(timestamp: u32, latency: u16) -> Self {
        Self { timestamp, latency }
    }
}

/// Wire record as found in the events file: `{"version", "timestamp", "query_time"}`.
/// Numeric ranges are enforced by the field types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub version: String,
    pub timestamp: u32,
    pub query_time: u16,
}

impl HealthCheck {
    pub fn sample(&self) -> Sample {
        Sample::new(self.timestamp, self.query_time)
    }
}
