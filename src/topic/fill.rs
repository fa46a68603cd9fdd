//! Topic synthesis from a pattern and parameter values

use std::borrow::Cow;

use thiserror::Error;

use super::params::{ParamKind, ParamValue, TopicParams};
use super::segment::{self, SEPARATOR, Segment};

/// Text written for a `+` wildcard with no value in [`fill`]
pub const MISSING_VALUE: &str = "undefined";

/// Error types for strict topic filling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicFillError {
	/// A `+name` wildcard has no value
	#[error("Missing value for parameter '{name}'")]
	MissingParameter {
		/// Parameter name
		name: String,
	},

	/// An unnamed `+` wildcard cannot be filled
	#[error("Cannot fill unnamed + wildcard at position {position}")]
	UnnamedWildcard {
		/// Segment index in the pattern
		position: usize,
	},

	/// Value shape does not fit the wildcard kind
	#[error("Parameter '{name}' expects a {expected} value")]
	ShapeMismatch {
		/// Parameter name
		name: String,
		/// Shape required by the wildcard
		expected: ParamKind,
	},
}

impl TopicFillError {
	/// Creates a new MissingParameter error
	pub fn missing_parameter(name: impl Into<String>) -> Self {
		Self::MissingParameter { name: name.into() }
	}

	/// Creates a new ShapeMismatch error
	pub fn shape_mismatch(
		name: impl Into<String>,
		expected: ParamKind,
	) -> Self {
		Self::ShapeMismatch {
			name: name.into(),
			expected,
		}
	}
}

/// Builds a topic by substituting wildcards with `params`.
///
/// - `+name` becomes the value of `name`, or the text `undefined` when it
///   has none. A multi-level value renders as its levels joined with `,`.
/// - `#name` becomes the levels of `name` joined with `/`. Without a value,
///   or with no levels, the segment is dropped together with its separator.
/// - Literals are copied.
///
/// Unnamed wildcards look up the empty name.
///
/// ```
/// use mqtt_pattern::{fill, TopicParams};
///
/// let params = TopicParams::new()
/// 	.with("room", "kitchen")
/// 	.with("rest", ["lamp", "on"]);
/// assert_eq!(fill("home/+room/#rest", &params), "home/kitchen/lamp/on");
/// assert_eq!(fill("home/#rest", &TopicParams::new()), "home");
/// ```
pub fn fill(pattern: &str, params: &TopicParams) -> String {
	let replacements =
		segment::segments(pattern).map(move |segment| match segment {
			| Segment::Literal(s) => Some(Cow::Borrowed(s)),
			| Segment::SingleLevel(name) => {
				Some(match params.get(name.unwrap_or_default()) {
					| Some(ParamValue::Single(value)) => {
						Cow::Borrowed(value.as_str())
					}
					| Some(value) => Cow::Owned(value.to_string()),
					| None => Cow::Borrowed(MISSING_VALUE),
				})
			}
			| Segment::MultiLevel(name) => {
				multi_level_value(params.get(name.unwrap_or_default()))
			}
		});

	join(replacements)
}

/// Strict form of [`fill`].
///
/// Fails instead of writing `undefined`, and rejects values whose shape
/// does not fit their wildcard. A `#` without a value still fills as zero
/// levels.
pub fn try_fill(
	pattern: &str,
	params: &TopicParams,
) -> Result<String, TopicFillError> {
	let mut replacements = Vec::new();

	for (i, segment) in segment::segments(pattern).enumerate() {
		let replacement = match segment {
			| Segment::Literal(s) => Some(Cow::Borrowed(s)),
			| Segment::SingleLevel(None) => {
				return Err(TopicFillError::UnnamedWildcard { position: i });
			}
			| Segment::SingleLevel(Some(name)) => match params.get(name) {
				| Some(ParamValue::Single(value)) => {
					Some(Cow::Borrowed(value.as_str()))
				}
				| Some(ParamValue::Multi(_)) => {
					return Err(TopicFillError::shape_mismatch(
						name,
						ParamKind::Single,
					));
				}
				| None => {
					tracing::debug!(
						pattern,
						parameter = name,
						"No value for single-level parameter"
					);
					return Err(TopicFillError::missing_parameter(name));
				}
			},
			| Segment::MultiLevel(None) => None,
			| Segment::MultiLevel(Some(name)) => match params.get(name) {
				| Some(ParamValue::Single(_)) => {
					return Err(TopicFillError::shape_mismatch(
						name,
						ParamKind::Multi,
					));
				}
				| value => multi_level_value(value),
			},
		};
		replacements.push(replacement);
	}

	Ok(join(replacements))
}

/// `None` marks a segment to drop.
fn multi_level_value(value: Option<&ParamValue>) -> Option<Cow<'_, str>> {
	match value {
		| Some(ParamValue::Multi(levels)) if !levels.is_empty() => {
			Some(Cow::Owned(levels.join("/")))
		}
		| Some(ParamValue::Single(value)) => {
			Some(Cow::Borrowed(value.as_str()))
		}
		| Some(ParamValue::Multi(_)) | None => None,
	}
}

fn join<'a>(
	replacements: impl IntoIterator<Item = Option<Cow<'a, str>>>,
) -> String {
	let mut topic = String::new();
	for (i, replacement) in replacements.into_iter().flatten().enumerate() {
		if i > 0 {
			topic.push(SEPARATOR);
		}
		topic.push_str(&replacement);
	}
	topic
}
