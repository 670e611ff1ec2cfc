//! Helpers that work on a matcher's response curve rather than on timestamps.

pub mod curve;
pub mod method;
pub mod peaks;
