use crate::config::{END_TOLERANCE_SECS, INTRO_CUTOFF_SECS};
use crate::error::{Result, SegmentationError};
use crate::types::{NormalizedSequence, Timestamp};

use super::ensure_unique_and_sorted;

/// Apply the start and end-of-recording rules to the news events.
///
/// At the start, a single news event inside the intro cutoff is a leftover of
/// the previous program and is dropped when it precedes the first intro. At the
/// end, a program still running after the last news event is closed at
/// `total_time`, and the closing event must sit within `END_TOLERANCE_SECS`
/// of the end.
///
/// A second news event inside the cutoff is rejected only when `strict` is
/// set; otherwise just the leading one is considered for dropping.
pub fn trim_boundaries(
    intros: &[Timestamp],
    news: &[Timestamp],
    total_time: f64,
    strict: bool,
) -> Result<NormalizedSequence> {
    ensure_unique_and_sorted("intros", intros)?;
    ensure_unique_and_sorted("news", news)?;
    if let Some(&first) = intros.first() {
        if first < 0.0 {
            return Err(SegmentationError::NegativeTimestamp {
                sequence: "intros",
                value: first,
            });
        }
    }

    // Sorted input: only the first two entries can both be early.
    let early_news = match news {
        [first, second, ..] if strict && *second <= INTRO_CUTOFF_SECS => {
            return Err(SegmentationError::MultipleEarlyNewsEvents {
                first: *first,
                second: *second,
                cutoff: INTRO_CUTOFF_SECS,
            });
        }
        [first, ..] if *first <= INTRO_CUTOFF_SECS => Some(*first),
        _ => None,
    };

    let (Some(&first_intro), Some(&last_intro)) = (intros.first(), intros.last()) else {
        return Ok(NormalizedSequence::from_sorted(news.to_vec()));
    };
    if first_intro > INTRO_CUTOFF_SECS {
        return Err(SegmentationError::IntroCutoffViolation {
            intro: first_intro,
            cutoff: INTRO_CUTOFF_SECS,
        });
    }
    if news.is_empty() {
        return Ok(NormalizedSequence::default());
    }

    let mut trimmed = news.to_vec();
    if early_news.is_some_and(|early| early < first_intro) {
        tracing::debug!(
            dropped = trimmed[0],
            first_intro,
            "timeline: dropping news event before first intro"
        );
        trimmed.remove(0);
    }
    if trimmed.is_empty() {
        return Ok(NormalizedSequence::from_sorted(trimmed));
    }

    if last_intro > total_time {
        return Err(SegmentationError::IntroOverflow {
            intro: last_intro,
            total_time,
        });
    }

    if trimmed.last().is_some_and(|&last| last < last_intro) {
        tracing::debug!(
            total_time,
            last_intro,
            "timeline: closing trailing segment at end of recording"
        );
        trimmed.push(total_time);
    }

    if let Some(&last_news) = trimmed.last() {
        if last_news < total_time - END_TOLERANCE_SECS {
            return Err(SegmentationError::IncompleteTrailingSegment {
                last_news,
                total_time,
                tolerance: END_TOLERANCE_SECS,
            });
        }
    }

    Ok(NormalizedSequence::from_sorted(trimmed))
}
