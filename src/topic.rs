//! Topic handling module
//!
//! This module provides components for working with MQTT-style topic
//! patterns: segment classification, matching, parameter extraction,
//! filling and cleaning, plus a compiled pattern type.

// Submodules
pub mod clean;
pub mod error;
pub mod extract;
pub mod fill;
pub mod matcher;
pub mod params;
/// Compiled topic patterns
pub mod pattern;
pub mod segment;

#[cfg(test)]
mod fill_tests;

// Re-export commonly used types for convenience
pub use clean::clean;
pub use error::{FillResult, PatternResult, TopicError, TopicResult};
pub use extract::{exec, extract};
pub use fill::{MISSING_VALUE, TopicFillError, fill, try_fill};
pub use matcher::matches;
pub use params::{ParamKind, ParamValue, TopicParams};
pub use pattern::{TopicPattern, TopicPatternError};
pub use segment::Segment;
