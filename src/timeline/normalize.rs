use std::collections::HashSet;

use crate::types::{NormalizedSequence, Timestamp};

/// Floor every detection to whole seconds, drop repeats and sort.
pub fn normalize(raw: &[Timestamp]) -> NormalizedSequence {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut seconds: Vec<Timestamp> = raw
        .iter()
        // `+ 0.0` folds -0.0 into 0.0 so both land on the same key.
        .map(|t| t.floor() + 0.0)
        .filter(|t| seen.insert(t.to_bits()))
        .collect();
    seconds.sort_by(f64::total_cmp);
    NormalizedSequence::from_sorted(seconds)
}
