use crate::config::{BEEP_REPEAT_LIMIT, BEEP_REPEAT_WINDOW_SECS};
use crate::error::Result;
use crate::types::{NormalizedSequence, Timestamp};

use super::ensure_unique_and_sorted;

/// Collapse each burst of beep detections into its first timestamp.
///
/// A detection joins the current burst when it is within
/// `BEEP_REPEAT_WINDOW_SECS` of the previous *raw* detection. After
/// `BEEP_REPEAT_LIMIT` absorbed repeats the next close detection starts a new
/// burst anyway, so one long run of true positives is not folded into a
/// single event.
pub fn consolidate_beeps(news: &[Timestamp]) -> Result<NormalizedSequence> {
    if news.is_empty() {
        return Ok(NormalizedSequence::default());
    }
    ensure_unique_and_sorted("news", news)?;

    let mut kept = vec![news[0]];
    let mut repeat_count = 0usize;
    for pair in news.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if repeat_count < BEEP_REPEAT_LIMIT && cur - prev <= BEEP_REPEAT_WINDOW_SECS {
            repeat_count += 1;
        } else {
            repeat_count = 0;
            kept.push(cur);
        }
    }

    tracing::debug!(
        raw = news.len(),
        kept = kept.len(),
        "timeline: consolidated beep bursts"
    );
    Ok(NormalizedSequence::from_sorted(kept))
}
