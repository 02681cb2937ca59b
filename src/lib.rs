// Library for the binary and integration tests

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod record_source;
pub mod report;
pub mod version;

pub use aggregation::{AggregateState, AggregationStore, VersionAggregate};
pub use error::AggregationError;
