use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::detection::method::MatchMethod;
use crate::error::SegmentationError;

/// Seconds from the start of the recording.
pub type Timestamp = f64;

/// Timestamps that are strictly increasing and unique at whole-second granularity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedSequence(Vec<Timestamp>);

impl NormalizedSequence {
    /// Caller guarantees the invariant, e.g. when taking a subsequence of an
    /// already normalized sequence.
    pub(crate) fn from_sorted(values: Vec<Timestamp>) -> Self {
        debug_assert!(is_normalized(&values));
        Self(values)
    }

    pub fn as_slice(&self) -> &[Timestamp] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Timestamp> {
        self.0
    }
}

/// Strictly increasing, and no two values fall in the same whole second.
pub(crate) fn is_normalized(values: &[Timestamp]) -> bool {
    values
        .windows(2)
        .all(|w| w[0] < w[1] && w[0].floor() != w[1].floor())
}

impl Deref for NormalizedSequence {
    type Target = [Timestamp];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Timestamp>> for NormalizedSequence {
    type Error = SegmentationError;

    fn try_from(values: Vec<Timestamp>) -> Result<Self, Self::Error> {
        if !is_normalized(&values) {
            return Err(SegmentationError::not_sorted("sequence"));
        }
        Ok(Self(values))
    }
}

impl From<NormalizedSequence> for Vec<Timestamp> {
    fn from(value: NormalizedSequence) -> Self {
        value.0
    }
}

/// One program unit. Interval is [start, end) in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Segment {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}

/// Indices of the local minima enclosing a peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TroughPair {
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakProminence {
    pub peak: usize,
    /// Height above the higher of the two troughs. Can be negative.
    pub prominence: f32,
    pub troughs: TroughPair,
}

/// Everything the external pattern matcher hands over for one recording.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectionInput {
    pub beep_timestamps: Vec<Timestamp>,
    pub intro_timestamps: Vec<Timestamp>,
    pub total_time: f64,
    /// Name of the matcher that produced the timestamps.
    #[serde(default)]
    pub method: Option<String>,
}

impl DetectionInput {
    pub fn match_method(&self) -> Result<MatchMethod, SegmentationError> {
        match self.method.as_deref() {
            Some(name) => name.parse(),
            None => Ok(MatchMethod::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentationOutput {
    pub segments: Vec<Segment>,
}
