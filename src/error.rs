use thiserror::Error;

/// Broad family of a [`SegmentationError`].
///
/// Structural errors mean a documented precondition or internal invariant was
/// broken. Semantic errors mean the detections are implausible for the
/// expected program layout; callers may choose to treat those more leniently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Structural,
    Semantic,
}

#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{sequence} timestamps are not strictly increasing and unique")]
    InputNotSortedOrUnique { sequence: &'static str },
    #[error("{sequence} contains negative timestamp {value}")]
    NegativeTimestamp { sequence: &'static str, value: f64 },
    #[error("{sequence} contains non-finite timestamp {value}")]
    NonFiniteTimestamp { sequence: &'static str, value: f64 },
    #[error("intro overflow: {intro} is greater than total time {total_time}")]
    IntroOverflow { intro: f64, total_time: f64 },
    #[error("segment {index} is malformed: start {start}, end {end}")]
    MalformedSegment { index: usize, start: f64, end: f64 },
    #[error("no segments left after consolidation")]
    EmptyResult,
    #[error("intros and news events differ in length ({intros} vs {news}); upstream consolidation failed")]
    LengthMismatch { intros: usize, news: usize },
    #[error("segment {index} starting at {start}s lasts {duration}s, less than the {minimum}s minimum")]
    SegmentTooShort {
        index: usize,
        start: f64,
        duration: f64,
        minimum: f64,
    },
    #[error("gap of {gap}s between {previous_end}s and {next_start}s is {limit}s or longer")]
    GapTooLarge {
        previous_end: f64,
        next_start: f64,
        gap: f64,
        limit: f64,
    },
    #[error("segment start {next_start}s is earlier than previous end {previous_end}s")]
    OrderingViolation { previous_end: f64, next_start: f64 },
    #[error("news events at {first}s and {second}s both fall within the first {cutoff}s")]
    MultipleEarlyNewsEvents { first: f64, second: f64, cutoff: f64 },
    #[error("first intro at {intro}s is past the {cutoff}s cutoff")]
    IntroCutoffViolation { intro: f64, cutoff: f64 },
    #[error("last news event at {last_news}s is not within {tolerance}s of the end ({total_time}s)")]
    IncompleteTrailingSegment {
        last_news: f64,
        total_time: f64,
        tolerance: f64,
    },
    #[error("peak index {index} is out of range for curve of length {len}")]
    PeakOutOfRange { index: usize, len: usize },
    #[error("unknown match method '{name}'")]
    UnknownMethod { name: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}

impl SegmentationError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn not_sorted(sequence: &'static str) -> Self {
        Self::InputNotSortedOrUnique { sequence }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::SegmentTooShort { .. }
            | Self::GapTooLarge { .. }
            | Self::OrderingViolation { .. }
            | Self::MultipleEarlyNewsEvents { .. }
            | Self::IntroCutoffViolation { .. }
            | Self::IncompleteTrailingSegment { .. } => ErrorClass::Semantic,
            _ => ErrorClass::Structural,
        }
    }

    pub fn is_semantic(&self) -> bool {
        self.class() == ErrorClass::Semantic
    }

    /// Stable snake_case name of the variant, used by fixtures and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Json { .. } => "json",
            Self::InputNotSortedOrUnique { .. } => "input_not_sorted_or_unique",
            Self::NegativeTimestamp { .. } => "negative_timestamp",
            Self::NonFiniteTimestamp { .. } => "non_finite_timestamp",
            Self::IntroOverflow { .. } => "intro_overflow",
            Self::MalformedSegment { .. } => "malformed_segment",
            Self::EmptyResult => "empty_result",
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::SegmentTooShort { .. } => "segment_too_short",
            Self::GapTooLarge { .. } => "gap_too_large",
            Self::OrderingViolation { .. } => "ordering_violation",
            Self::MultipleEarlyNewsEvents { .. } => "multiple_early_news_events",
            Self::IntroCutoffViolation { .. } => "intro_cutoff_violation",
            Self::IncompleteTrailingSegment { .. } => "incomplete_trailing_segment",
            Self::PeakOutOfRange { .. } => "peak_out_of_range",
            Self::UnknownMethod { .. } => "unknown_method",
            Self::InvalidInput { .. } => "invalid_input",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_errors_are_semantic() {
        let err = SegmentationError::GapTooLarge {
            previous_end: 100.0,
            next_start: 1000.0,
            gap: 900.0,
            limit: 900.0,
        };
        assert!(err.is_semantic());
        assert_eq!(err.kind(), "gap_too_large");
    }

    #[test]
    fn precondition_errors_are_structural() {
        assert_eq!(
            SegmentationError::not_sorted("news").class(),
            ErrorClass::Structural
        );
        assert_eq!(SegmentationError::EmptyResult.class(), ErrorClass::Structural);
        assert_eq!(
            SegmentationError::LengthMismatch { intros: 2, news: 3 }.class(),
            ErrorClass::Structural
        );
    }

    #[test]
    fn display_names_the_sequence() {
        let err = SegmentationError::not_sorted("intros");
        assert_eq!(
            err.to_string(),
            "intros timestamps are not strictly increasing and unique"
        );
    }
}
