use crate::error::SegmentationError;
use crate::pipeline::traits::{BeepConsolidator, IntroConsolidator};
use crate::timeline::{consolidate_beeps, consolidate_intros};
use crate::types::{NormalizedSequence, Timestamp};

/// Burst debounce capped at five absorbed repeats per beep pattern.
pub struct RepeatLimitBeepConsolidator;

impl BeepConsolidator for RepeatLimitBeepConsolidator {
    fn consolidate_beeps(
        &self,
        news: &[Timestamp],
    ) -> Result<NormalizedSequence, SegmentationError> {
        consolidate_beeps(news)
    }
}

/// Keeps the earliest intro ahead of every news event.
pub struct EarliestIntroConsolidator;

impl IntroConsolidator for EarliestIntroConsolidator {
    fn consolidate_intros(
        &self,
        intros: &[Timestamp],
        news: &[Timestamp],
    ) -> Result<NormalizedSequence, SegmentationError> {
        consolidate_intros(intros, news)
    }
}
