//! # MQTT Pattern
//!
//! Topic pattern matching, parameter extraction, filling and cleaning for
//! slash-delimited pub/sub topics.
//!
//! ## Patterns
//!
//! A pattern is a topic whose segments may be wildcards:
//!
//! - `+` matches a single topic level; `+name` also binds it to `name`
//! - `#` matches the remaining levels (zero or more); `#name` binds them as
//!   a list. It is only meaningful as the last segment.
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_pattern::{clean, exec, fill, matches, ParamValue};
//!
//! let pattern = "sensors/+room/#metric";
//!
//! assert!(matches(pattern, "sensors/kitchen/temperature/celsius"));
//!
//! let params = exec(pattern, "sensors/kitchen/temperature/celsius").unwrap();
//! assert_eq!(params.single("room"), Some("kitchen"));
//! assert_eq!(
//! 	params.get("metric"),
//! 	Some(&ParamValue::from(["temperature", "celsius"]))
//! );
//!
//! assert_eq!(fill(pattern, &params), "sensors/kitchen/temperature/celsius");
//! assert_eq!(clean(pattern), "sensors/+/#");
//! ```
//!
//! ## Compiled Patterns
//!
//! [`TopicPattern`] validates a pattern once (rejecting a misplaced `#` or
//! repeated parameter names), exposes its parameter schema and can cache
//! match results:
//!
//! ```rust
//! use mqtt_pattern::{CacheStrategy, TopicPattern};
//!
//! let pattern = TopicPattern::new("devices/+id/state", CacheStrategy::new(64))?;
//! assert_eq!(pattern.subscription_pattern(), "devices/+/state");
//!
//! let params = pattern.exec("devices/lamp/state").unwrap();
//! assert_eq!(params.single("id"), Some("lamp"));
//! # Ok::<(), mqtt_pattern::TopicPatternError>(())
//! ```
//!
//! The free functions are total: they never panic and never fail on any
//! input string. Only [`try_fill`] and [`TopicPattern`] report errors.

#![warn(missing_docs)]

pub mod config;
pub mod topic;

pub use config::CacheStrategy;
pub use topic::{
	MISSING_VALUE, ParamKind, ParamValue, Segment, TopicError, TopicFillError,
	TopicParams, TopicPattern, TopicPatternError, clean, exec, extract, fill,
	matches, try_fill,
};

/// Result type alias for operations that may fail with TopicError
pub type Result<T> = std::result::Result<T, TopicError>;

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_pattern::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		CacheStrategy, ParamValue, TopicParams, TopicPattern, clean, exec,
		fill, matches,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use mqtt_pattern::errors::*;
/// ```
pub mod errors {
	pub use crate::topic::{FillResult, PatternResult, TopicResult};
	pub use crate::{TopicError, TopicFillError, TopicPatternError};
}
