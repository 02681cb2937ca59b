// Reads health checks from a JSON array. Malformed records never reach the store.

use crate::models::HealthCheck;
use anyhow::Context;
use std::path::Path;
use tracing::{info, instrument, warn};

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>, skip_invalid: bool) -> anyhow::Result<Vec<HealthCheck>> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading events file {}", path.display()))?;
    load_from_str(&s, skip_invalid)
}

/// Parses records one by one so a bad record can be reported by index.
/// With `skip_invalid` the bad record is logged and dropped; otherwise the load fails.
pub fn load_from_str(s: &str, skip_invalid: bool) -> anyhow::Result<Vec<HealthCheck>> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(s).context("events must be a JSON array")?;

    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;
    for (index, value) in raw.into_iter().enumerate() {
        match parse_record(value) {
            Ok(record) => records.push(record),
            Err(e) if skip_invalid => {
                warn!(index, error = %e, "skipping invalid health check");
                skipped += 1;
            }
            Err(e) => return Err(e.context(format!("invalid health check at index {}", index))),
        }
    }

    info!(loaded = records.len(), skipped, "health checks loaded");
    Ok(records)
}

fn parse_record(value: serde_json::Value) -> anyhow::Result<HealthCheck> {
    let record: HealthCheck = serde_json::from_value(value)?;
    anyhow::ensure!(
        !record.version.is_empty(),
        "version must be non-empty"
    );
    Ok(record)
}
