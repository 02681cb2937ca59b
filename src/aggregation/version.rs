// One release version: raw samples plus min/max/mean memoized until the next record.

use crate::error::AggregationError;
use crate::models::{Sample, VersionSummary};

/// Whether memoized aggregates reflect the current samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateState {
    Clean,
    Dirty,
}

#[derive(Debug, Clone)]
pub struct VersionAggregate {
    id: String,
    samples: Vec<Sample>,
    min: u16,
    max: u16,
    mean: f32,
    state: AggregateState,
    passes: u64,
}

impl VersionAggregate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            samples: Vec::new(),
            min: 0,
            max: 0,
            mean: 0.0,
            state: AggregateState::Clean,
            passes: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Samples in ingestion order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn state(&self) -> AggregateState {
        self.state
    }

    /// Number of recomputations performed so far.
    pub fn aggregation_passes(&self) -> u64 {
        self.passes
    }

    pub fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
        self.state = AggregateState::Dirty;
    }

    /// Returns min/max/mean, recomputing only if samples changed since the last call.
    pub fn summary(&mut self) -> Result<VersionSummary, AggregationError> {
        let Some(first) = self.samples.first() else {
            return Err(AggregationError::EmptyAggregate {
                version: self.id.clone(),
            });
        };

        if self.state == AggregateState::Dirty {
            let mut min = first.latency;
            let mut max = first.latency;
            let mut sum: u64 = 0;
            for s in &self.samples {
                min = min.min(s.latency);
                max = max.max(s.latency);
                sum += u64::from(s.latency);
            }
            self.min = min;
            self.max = max;
            self.mean = (sum as f64 / self.samples.len() as f64) as f32;
            self.state = AggregateState::Clean;
            self.passes += 1;
        }

        Ok(VersionSummary {
            id: self.id.clone(),
            min: self.min,
            max: self.max,
            mean: self.mean,
            samples: self.samples.len(),
        })
    }
}
