// Read-only views handed to the presentation layer.

use serde::Serialize;
use std::fmt;

/// Aggregates for one version: latency extremes and mean over all its samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub id: String,
    pub min: u16,
    pub max: u16,
    pub mean: f32,
    pub samples: usize,
}

impl fmt::Display for VersionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: min={} max={} mean={:.2} ({} samples)",
            self.id, self.min, self.max, self.mean, self.samples
        )
    }
}

/// Lowest-mean and highest-mean versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseOverview {
    pub best: VersionSummary,
    pub worst: VersionSummary,
}

/// A point in time where the active version changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseHistoryEntry {
    pub version_id: String,
    pub start_time: u32,
}

impl ReleaseHistoryEntry {
    pub fn new(version_id: impl Into<String>, start_time: u32) -> Self {
        Self {
            version_id: version_id.into(),
            start_time,
        }
    }
}
