use crate::config::{
    FIRST_SEGMENT_START_WINDOW_SECS, MAX_GAP_SECS, MIN_FIRST_SEGMENT_SECS, MIN_SEGMENT_SECS,
};
use crate::error::{Result, SegmentationError};
use crate::types::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Enforce minimum segment duration and maximum gap.
    pub strict: bool,
    /// A first segment starting in the first two minutes only needs five minutes.
    pub allow_first_short: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            strict: true,
            allow_first_short: false,
        }
    }
}

/// Final sanity pass over a finished segment list.
pub fn validate(segments: &[Segment], rules: ValidationRules) -> Result<()> {
    if segments.is_empty() {
        return Err(SegmentationError::EmptyResult);
    }

    for (index, seg) in segments.iter().enumerate() {
        if seg.start < 0.0 || seg.start > seg.end {
            return Err(SegmentationError::MalformedSegment {
                index,
                start: seg.start,
                end: seg.end,
            });
        }
        if rules.strict {
            let minimum = minimum_duration(index, seg, rules);
            if seg.duration() < minimum {
                return Err(SegmentationError::SegmentTooShort {
                    index,
                    start: seg.start,
                    duration: seg.duration(),
                    minimum,
                });
            }
        }
    }

    for pair in segments.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let gap = next.start - prev.end;
        if gap < 0.0 {
            return Err(SegmentationError::OrderingViolation {
                previous_end: prev.end,
                next_start: next.start,
            });
        }
        if rules.strict && gap >= MAX_GAP_SECS {
            return Err(SegmentationError::GapTooLarge {
                previous_end: prev.end,
                next_start: next.start,
                gap,
                limit: MAX_GAP_SECS,
            });
        }
    }

    Ok(())
}

fn minimum_duration(index: usize, seg: &Segment, rules: ValidationRules) -> f64 {
    let cold_open =
        rules.allow_first_short && index == 0 && seg.start < FIRST_SEGMENT_START_WINDOW_SECS;
    if cold_open {
        MIN_FIRST_SEGMENT_SECS
    } else {
        MIN_SEGMENT_SECS
    }
}
