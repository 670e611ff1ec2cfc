use std::path::Path;

use serde::Deserialize;

use crate::error::SegmentationError;

/// A six-beep pattern means five repeats.
pub const BEEP_REPEAT_LIMIT: usize = 5;
/// Raw beep detections this close to the previous one belong to the same burst.
pub const BEEP_REPEAT_WINDOW_SECS: f64 = 2.0;
/// One early news event is allowed in the first ten minutes, but no intro past it.
pub const INTRO_CUTOFF_SECS: f64 = 10.0 * 60.0;
/// The last news event must land this close to the end of the recording.
pub const END_TOLERANCE_SECS: f64 = 10.0;
pub const MIN_SEGMENT_SECS: f64 = 15.0 * 60.0;
pub const MIN_FIRST_SEGMENT_SECS: f64 = 5.0 * 60.0;
pub const FIRST_SEGMENT_START_WINDOW_SECS: f64 = 2.0 * 60.0;
pub const MAX_GAP_SECS: f64 = 15.0 * 60.0;
pub const DEFAULT_SEGMENT_PAD_SECS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Seconds added after each news event so the cue itself is kept.
    pub segment_pad_secs: f64,
    /// Enforce the minimum duration and maximum gap rules. Also rejects a
    /// second news event inside the intro cutoff; when off, only the leading
    /// early news event is considered for dropping.
    pub strict: bool,
    /// Allow a short cold-open first segment.
    pub allow_first_short: bool,
    /// Cap padded segment ends at the recording's total time.
    pub clamp_to_total_time: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            segment_pad_secs: DEFAULT_SEGMENT_PAD_SECS,
            strict: true,
            allow_first_short: false,
            clamp_to_total_time: true,
        }
    }
}

impl SegmenterConfig {
    pub fn load(path: &Path) -> Result<Self, SegmentationError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| SegmentationError::io("read segmenter config", e))?;
        serde_json::from_str(&data)
            .map_err(|e| SegmentationError::json("parse segmenter config", e))
    }

    pub(crate) fn check(&self) -> Result<(), SegmentationError> {
        if !self.segment_pad_secs.is_finite() || self.segment_pad_secs < 0.0 {
            return Err(SegmentationError::invalid_config(format!(
                "segment_pad_secs must be a finite non-negative number, got {}",
                self.segment_pad_secs
            )));
        }
        Ok(())
    }
}
