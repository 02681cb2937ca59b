// Release history: version-change points over all samples ordered by time.

use crate::models::ReleaseHistoryEntry;

/// Builds the timeline from `(timestamp, version)` pairs.
///
/// Pairs are stable-sorted by timestamp, so equal timestamps keep the order they were given in.
/// An entry is emitted whenever the version differs from the previous emitted one; a version that
/// comes back after another produces a second entry.
pub fn release_history<'a, I>(observations: I) -> Vec<ReleaseHistoryEntry>
where
    I: IntoIterator<Item = (u32, &'a str)>,
{
    let mut flat: Vec<(u32, &str)> = observations.into_iter().collect();
    flat.sort_by_key(|&(ts, _)| ts);

    let mut out: Vec<ReleaseHistoryEntry> = Vec::new();
    for (ts, version) in flat {
        if out.last().is_some_and(|e| e.version_id == version) {
            continue;
        }
        out.push(ReleaseHistoryEntry::new(version, ts));
    }
    out
}
