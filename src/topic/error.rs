//! Error types and utilities for the topic module
//!
//! This module contains the composite error type for the entire topic
//! module, while individual error types remain in their respective modules.

use thiserror::Error;

use super::fill::TopicFillError;
use super::pattern::TopicPatternError;

/// Comprehensive error type for all topic-related operations
///
/// Aggregates the errors of the fallible surfaces (pattern compilation and
/// strict filling) so callers can use a single type with `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// Topic pattern parsing or validation error
	#[error("Topic pattern error: {0}")]
	Pattern(#[from] TopicPatternError),

	/// Topic filling error when substituting parameters
	#[error("Topic fill error: {0}")]
	Fill(#[from] TopicFillError),
}

/// Convenient Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Convenient Result type for pattern operations
pub type PatternResult<T> = Result<T, TopicPatternError>;

/// Convenient Result type for fill operations
pub type FillResult<T> = Result<T, TopicFillError>;
