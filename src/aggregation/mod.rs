// Lazy aggregation over all ingested versions.
// Ingest marks the store dirty; read accessors recompute once and then serve memoized results.

pub mod history;
mod version;

pub use version::{AggregateState, VersionAggregate};

use crate::error::AggregationError;
use crate::models::{ReleaseHistoryEntry, ReleaseOverview, Sample, VersionSummary};
use std::collections::HashMap;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct AggregationStore {
    versions: HashMap<String, VersionAggregate>,
    /// Version ids in first-seen order; drives recompute iteration and history tie-breaks.
    discovery: Vec<String>,
    best: Option<String>,
    worst: Option<String>,
    state: AggregateState,
    passes: u64,
}

impl Default for AggregationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationStore {
    pub fn new() -> Self {
        Self {
            versions: HashMap::new(),
            discovery: Vec::new(),
            best: None,
            worst: None,
            state: AggregateState::Clean,
            passes: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn state(&self) -> AggregateState {
        self.state
    }

    /// Number of store-level recompute passes performed so far.
    pub fn aggregation_passes(&self) -> u64 {
        self.passes
    }

    pub fn sample_count(&self) -> usize {
        self.versions.values().map(|v| v.samples().len()).sum()
    }

    pub fn version(&self, id: &str) -> Option<&VersionAggregate> {
        self.versions.get(id)
    }

    /// Routes the sample to its version, creating the version on first sight.
    pub fn ingest(&mut self, version_id: &str, sample: Sample) {
        let discovery = &mut self.discovery;
        let aggregate = self
            .versions
            .entry(version_id.to_string())
            .or_insert_with(|| {
                debug!(version = %version_id, "new version");
                discovery.push(version_id.to_string());
                VersionAggregate::new(version_id)
            });
        aggregate.record(sample);
        self.state = AggregateState::Dirty;
    }

    /// Re-derives every version summary and the best/worst ids. No-op when clean.
    /// Ties go to the version ingested first.
    #[instrument(skip(self), fields(versions = self.versions.len()))]
    pub fn recompute(&mut self) -> Result<(), AggregationError> {
        if self.state == AggregateState::Clean {
            return Ok(());
        }

        let mut best: Option<(&str, f32)> = None;
        let mut worst: Option<(&str, f32)> = None;
        for id in &self.discovery {
            let Some(aggregate) = self.versions.get_mut(id) else {
                continue;
            };
            let mean = aggregate.summary()?.mean;
            if best.is_none_or(|(_, m)| mean < m) {
                best = Some((id.as_str(), mean));
            }
            if worst.is_none_or(|(_, m)| mean > m) {
                worst = Some((id.as_str(), mean));
            }
        }

        self.best = best.map(|(id, _)| id.to_string());
        self.worst = worst.map(|(id, _)| id.to_string());
        self.state = AggregateState::Clean;
        self.passes += 1;
        debug!(
            best = ?self.best,
            worst = ?self.worst,
            "store aggregates recomputed"
        );
        Ok(())
    }

    /// All version summaries, sorted by id.
    pub fn list_versions(&mut self) -> Result<Vec<VersionSummary>, AggregationError> {
        self.recompute()?;
        let mut out = self
            .versions
            .values_mut()
            .map(VersionAggregate::summary)
            .collect::<Result<Vec<_>, _>>()?;
        out.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(out)
    }

    /// `(best, worst)` version ids by mean latency.
    pub fn best_and_worst(&mut self) -> Result<(String, String), AggregationError> {
        self.recompute()?;
        match (&self.best, &self.worst) {
            (Some(best), Some(worst)) => Ok((best.clone(), worst.clone())),
            _ => Err(AggregationError::EmptyStore),
        }
    }

    /// Full summaries of the best and worst versions.
    pub fn overview(&mut self) -> Result<ReleaseOverview, AggregationError> {
        let (best, worst) = self.best_and_worst()?;
        Ok(ReleaseOverview {
            best: self.summary_of(&best)?,
            worst: self.summary_of(&worst)?,
        })
    }

    fn summary_of(&mut self, id: &str) -> Result<VersionSummary, AggregationError> {
        self.versions
            .get_mut(id)
            .ok_or(AggregationError::EmptyStore)?
            .summary()
    }

    /// Version-change timeline over every sample. Does not touch memoized state.
    pub fn release_history(&self) -> Vec<ReleaseHistoryEntry> {
        let observations = self.discovery.iter().filter_map(|id| {
            self.versions.get(id).map(move |v| {
                v.samples()
                    .iter()
                    .map(move |s| (s.timestamp, id.as_str()))
            })
        });
        history::release_history(observations.flatten())
    }
}
