//! Timestamp consolidation: from raw detections to validated segments.

mod beeps;
mod boundaries;
mod intros;
mod normalize;
mod segments;
mod validate;

pub use beeps::consolidate_beeps;
pub use boundaries::trim_boundaries;
pub use intros::consolidate_intros;
pub use normalize::normalize;
pub use segments::{build_segments, clamp_to_duration, pad_segments, remove_zero_length};
pub use validate::{validate, ValidationRules};

use crate::error::{Result, SegmentationError};
use crate::types::{is_normalized, Timestamp};

pub(crate) fn ensure_unique_and_sorted(sequence: &'static str, values: &[Timestamp]) -> Result<()> {
    if is_normalized(values) {
        Ok(())
    } else {
        Err(SegmentationError::not_sorted(sequence))
    }
}
