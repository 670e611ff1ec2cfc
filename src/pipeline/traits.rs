use crate::error::SegmentationError;
use crate::types::{NormalizedSequence, Timestamp};

pub trait BeepConsolidator: Send + Sync {
    fn consolidate_beeps(&self, news: &[Timestamp])
        -> Result<NormalizedSequence, SegmentationError>;
}

pub trait IntroConsolidator: Send + Sync {
    fn consolidate_intros(
        &self,
        intros: &[Timestamp],
        news: &[Timestamp],
    ) -> Result<NormalizedSequence, SegmentationError>;
}
