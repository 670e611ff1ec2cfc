use crate::config::SegmenterConfig;
use crate::error::SegmentationError;
use crate::pipeline::defaults::{EarliestIntroConsolidator, RepeatLimitBeepConsolidator};
use crate::pipeline::runtime::{SegmentPipeline, SegmentPipelineParts};
use crate::pipeline::traits::{BeepConsolidator, IntroConsolidator};

pub struct SegmentPipelineBuilder {
    config: SegmenterConfig,
    beep_consolidator: Option<Box<dyn BeepConsolidator>>,
    intro_consolidator: Option<Box<dyn IntroConsolidator>>,
}

impl SegmentPipelineBuilder {
    pub fn new(config: SegmenterConfig) -> Self {
        Self {
            config,
            beep_consolidator: None,
            intro_consolidator: None,
        }
    }

    pub fn with_beep_consolidator(mut self, beep_consolidator: Box<dyn BeepConsolidator>) -> Self {
        self.beep_consolidator = Some(beep_consolidator);
        self
    }

    pub fn with_intro_consolidator(
        mut self,
        intro_consolidator: Box<dyn IntroConsolidator>,
    ) -> Self {
        self.intro_consolidator = Some(intro_consolidator);
        self
    }

    pub fn build(self) -> Result<SegmentPipeline, SegmentationError> {
        self.config.check()?;

        Ok(SegmentPipeline::from_parts(SegmentPipelineParts {
            config: self.config,
            beep_consolidator: self
                .beep_consolidator
                .unwrap_or_else(|| Box::new(RepeatLimitBeepConsolidator)),
            intro_consolidator: self
                .intro_consolidator
                .unwrap_or_else(|| Box::new(EarliestIntroConsolidator)),
        }))
    }
}
