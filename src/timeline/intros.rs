use crate::error::{Result, SegmentationError};
use crate::types::{NormalizedSequence, Timestamp};

use super::ensure_unique_and_sorted;

/// Keep at most one intro per news event: the earliest one preceding it.
///
/// Intros are split into consecutive groups, each holding every unconsumed
/// intro strictly earlier than the next news event; intros after the last
/// news event form a trailing group. The first element of every non-empty
/// group survives.
pub fn consolidate_intros(
    intros: &[Timestamp],
    news: &[Timestamp],
) -> Result<NormalizedSequence> {
    ensure_unique_and_sorted("intros", intros)?;
    ensure_unique_and_sorted("news", news)?;

    if news.is_empty() {
        // Nothing to anchor later intros to.
        return Ok(NormalizedSequence::from_sorted(
            intros.first().copied().into_iter().collect(),
        ));
    }

    let Some(&first) = intros.first() else {
        return Ok(NormalizedSequence::default());
    };
    if first < 0.0 {
        return Err(SegmentationError::NegativeTimestamp {
            sequence: "intros",
            value: first,
        });
    }

    let mut kept = Vec::with_capacity(news.len() + 1);
    let mut cursor = 0usize;
    for &news_ts in news {
        let group_start = cursor;
        while cursor < intros.len() && intros[cursor] < news_ts {
            cursor += 1;
        }
        if cursor > group_start {
            kept.push(intros[group_start]);
        }
    }
    if cursor < intros.len() {
        kept.push(intros[cursor]);
    }

    tracing::debug!(
        raw = intros.len(),
        news = news.len(),
        kept = kept.len(),
        "timeline: consolidated intros"
    );
    Ok(NormalizedSequence::from_sorted(kept))
}
