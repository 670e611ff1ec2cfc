use crate::config::SegmenterConfig;
use crate::error::SegmentationError;
use crate::pipeline::traits::{BeepConsolidator, IntroConsolidator};
use crate::timeline::{
    build_segments, clamp_to_duration, normalize, pad_segments, remove_zero_length,
    trim_boundaries, validate, ValidationRules,
};
use crate::types::{DetectionInput, NormalizedSequence, SegmentationOutput, Timestamp};

/// Turns one recording's raw detections into validated program segments.
///
/// Holds no per-recording state, so a single instance can serve many
/// recordings, including from several threads.
pub struct SegmentPipeline {
    config: SegmenterConfig,
    beep_consolidator: Box<dyn BeepConsolidator>,
    intro_consolidator: Box<dyn IntroConsolidator>,
}

pub(crate) struct SegmentPipelineParts {
    pub config: SegmenterConfig,
    pub beep_consolidator: Box<dyn BeepConsolidator>,
    pub intro_consolidator: Box<dyn IntroConsolidator>,
}

impl SegmentPipeline {
    pub(crate) fn from_parts(parts: SegmentPipelineParts) -> Self {
        Self {
            config: parts.config,
            beep_consolidator: parts.beep_consolidator,
            intro_consolidator: parts.intro_consolidator,
        }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Normalize raw beep detections and collapse their bursts.
    pub fn consolidate_news(
        &self,
        raw_beeps: &[Timestamp],
    ) -> Result<NormalizedSequence, SegmentationError> {
        let news = normalize(raw_beeps);
        self.beep_consolidator.consolidate_beeps(&news)
    }

    pub fn process(&self, input: &DetectionInput) -> Result<SegmentationOutput, SegmentationError> {
        check_input(input)?;
        let total_time = input.total_time;

        let news = self.consolidate_news(&input.beep_timestamps)?;
        let intros = normalize(&input.intro_timestamps);
        let intros = self.intro_consolidator.consolidate_intros(&intros, &news)?;
        let news = trim_boundaries(&intros, &news, total_time, self.config.strict)?;
        tracing::debug!(
            intros = intros.len(),
            news = news.len(),
            total_time,
            "pipeline: consolidated detections"
        );

        let segments = build_segments(&intros, &news)?;
        let segments = pad_segments(&segments, self.config.segment_pad_secs);
        let segments = if self.config.clamp_to_total_time {
            clamp_to_duration(&segments, total_time)
        } else {
            segments
        };
        let segments = remove_zero_length(segments);
        if segments.is_empty() {
            return Err(SegmentationError::EmptyResult);
        }

        validate(
            &segments,
            ValidationRules {
                strict: self.config.strict,
                allow_first_short: self.config.allow_first_short,
            },
        )?;
        tracing::debug!(segments = segments.len(), "pipeline: segments validated");

        Ok(SegmentationOutput { segments })
    }
}

fn check_input(input: &DetectionInput) -> Result<(), SegmentationError> {
    let method = input.match_method()?;
    tracing::trace!(%method, "pipeline: detections from matcher");

    let total_time = input.total_time;
    if !total_time.is_finite() {
        return Err(SegmentationError::NonFiniteTimestamp {
            sequence: "total_time",
            value: total_time,
        });
    }
    if total_time < 0.0 {
        return Err(SegmentationError::NegativeTimestamp {
            sequence: "total_time",
            value: total_time,
        });
    }

    for (sequence, values) in [
        ("beeps", &input.beep_timestamps),
        ("intros", &input.intro_timestamps),
    ] {
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(SegmentationError::NonFiniteTimestamp { sequence, value });
        }
        if let Some(&value) = values.iter().find(|&&v| v < 0.0) {
            return Err(SegmentationError::NegativeTimestamp { sequence, value });
        }
    }

    for &intro in &input.intro_timestamps {
        if intro > total_time {
            return Err(SegmentationError::IntroOverflow { intro, total_time });
        }
    }
    Ok(())
}
