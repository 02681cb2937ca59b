// Domain models: input records, per-version summaries and derived release views.

mod sample;
mod summary;

pub use sample::{HealthCheck, Sample};
pub use summary::{ReleaseHistoryEntry, ReleaseOverview, VersionSummary};
