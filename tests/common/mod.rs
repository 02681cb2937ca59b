// Shared test helpers

use release_stats::AggregationStore;
use release_stats::models::Sample;

/// Store fed with `(version, timestamp, latency)` triples in order.
pub fn store_from(records: &[(&str, u32, u16)]) -> AggregationStore {
    let mut store = AggregationStore::new();
    for &(version, ts, latency) in records {
        store.ingest(version, Sample::new(ts, latency));
    }
    store
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
