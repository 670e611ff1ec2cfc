pub mod config;
pub mod detection;
pub mod error;
pub mod pipeline;
pub mod timeline;
pub mod types;

pub use config::SegmenterConfig;
pub use detection::method::MatchMethod;
pub use detection::peaks::{calculate_peak_prominence, find_closest_troughs, rank_peaks};
pub use error::{ErrorClass, SegmentationError};
pub use pipeline::builder::SegmentPipelineBuilder;
pub use pipeline::runtime::SegmentPipeline;
pub use pipeline::traits::{BeepConsolidator, IntroConsolidator};
pub use timeline::ValidationRules;
pub use types::{
    DetectionInput, NormalizedSequence, PeakProminence, Segment, SegmentationOutput, Timestamp,
    TroughPair,
};
