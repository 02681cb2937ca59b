// Presentation: renders the three views (per-version aggregates, best/worst, release history)
// as text or a single JSON document.

use crate::aggregation::AggregationStore;
use crate::config::{OutputFormat, TimeZoneMode};
use crate::error::AggregationError;
use crate::models::{ReleaseHistoryEntry, ReleaseOverview, VersionSummary};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub versions: Vec<VersionSummary>,
    /// None when nothing was ingested.
    pub overview: Option<ReleaseOverview>,
    pub history: Vec<ReleaseHistoryEntry>,
}

impl Report {
    pub fn build(store: &mut AggregationStore) -> Result<Self, AggregationError> {
        let versions = store.list_versions()?;
        let overview = match store.overview() {
            Ok(o) => Some(o),
            Err(AggregationError::EmptyStore) => None,
            Err(e) => return Err(e),
        };
        Ok(Self {
            versions,
            overview,
            history: store.release_history(),
        })
    }

    pub fn render(&self, format: OutputFormat, tz: TimeZoneMode) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text(tz)?),
        }
    }

    fn render_text(&self, tz: TimeZoneMode) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        section(&mut out, "Aggregates By Version")?;
        for v in &self.versions {
            writeln!(out, "{}", v)?;
        }

        section(&mut out, "Release Overview")?;
        match &self.overview {
            Some(o) => {
                writeln!(out, "Best Release: {} (mean {:.2})", o.best.id, o.best.mean)?;
                writeln!(out, "Worst Release: {} (mean {:.2})", o.worst.id, o.worst.mean)?;
            }
            None => writeln!(out, "no versions")?,
        }

        section(&mut out, "Release History")?;
        for entry in &self.history {
            writeln!(
                out,
                "{} => {}",
                format_timestamp(entry.start_time, tz),
                entry.version_id
            )?;
        }

        Ok(out)
    }
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    if !out.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.len()))
}

/// RFC 3339 rendering of seconds since epoch.
pub fn format_timestamp(ts: u32, tz: TimeZoneMode) -> String {
    let Some(utc) = DateTime::from_timestamp(i64::from(ts), 0) else {
        return ts.to_string();
    };
    match tz {
        TimeZoneMode::Utc => utc.to_rfc3339(),
        TimeZoneMode::Local => utc.with_timezone(&Local).to_rfc3339(),
    }
}
