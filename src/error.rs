// Errors surfaced by the aggregation core. Edges (config, input, report) use anyhow.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// Summary requested for a version that has no samples; mean is undefined.
    #[error("version {version:?} has no samples to aggregate")]
    EmptyAggregate { version: String },
    /// Best/worst requested before anything was ingested.
    #[error("no versions ingested")]
    EmptyStore,
}
