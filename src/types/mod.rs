//! Shared value types for survey calculations

mod survey;

pub use survey::{SectionProjection, SegmentDeltas, SurveyPair, SurveyStation};
