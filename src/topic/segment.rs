//! Topic segment model: splitting on `/` and classifying pattern segments

use std::borrow::Cow;

/// Level separator shared by patterns and topics
pub const SEPARATOR: char = '/';

/// Marker of a single-level wildcard (`+` or `+name`)
pub const SINGLE_LEVEL: char = '+';

/// Marker of a multi-level wildcard (`#` or `#name`)
pub const MULTI_LEVEL: char = '#';

/// Splits a pattern or topic into its segments.
///
/// Never yields an empty iterator: `""` produces a single empty segment.
pub fn split(path: &str) -> std::str::Split<'_, char> {
	path.split(SEPARATOR)
}

/// One `/`-delimited unit of a pattern, classified by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
	/// Literal segment, compared byte-for-byte
	Literal(&'a str),
	/// Single-level wildcard `+`, optionally named `+name`
	SingleLevel(Option<&'a str>),
	/// Multi-level wildcard `#`, optionally named `#name`
	MultiLevel(Option<&'a str>),
}

impl<'a> Segment<'a> {
	/// Classifies a raw segment.
	pub fn parse(raw: &'a str) -> Self {
		if let Some(name) = raw.strip_prefix(MULTI_LEVEL) {
			Segment::MultiLevel(non_empty(name))
		} else if let Some(name) = raw.strip_prefix(SINGLE_LEVEL) {
			Segment::SingleLevel(non_empty(name))
		} else {
			Segment::Literal(raw)
		}
	}

	/// Returns the segment as it appears in a subscription: wildcards lose
	/// their names.
	pub fn as_str(&self) -> &'a str {
		match self {
			| Segment::Literal(s) => *s,
			| Segment::SingleLevel(_) => "+",
			| Segment::MultiLevel(_) => "#",
		}
	}

	/// Returns the segment as written in a pattern, names included.
	pub fn as_wildcard(&self) -> Cow<'a, str> {
		match self {
			| Segment::Literal(s) => Cow::Borrowed(*s),
			| Segment::SingleLevel(None) => Cow::Borrowed("+"),
			| Segment::MultiLevel(None) => Cow::Borrowed("#"),
			| Segment::SingleLevel(Some(name)) => {
				Cow::Owned(format!("{SINGLE_LEVEL}{name}"))
			}
			| Segment::MultiLevel(Some(name)) => {
				Cow::Owned(format!("{MULTI_LEVEL}{name}"))
			}
		}
	}

	/// Returns the parameter name of a named wildcard.
	pub fn param_name(&self) -> Option<&'a str> {
		match self {
			| Segment::SingleLevel(name) | Segment::MultiLevel(name) => *name,
			| Segment::Literal(_) => None,
		}
	}

	/// Returns true for `+` and `#` segments.
	pub fn is_wildcard(&self) -> bool {
		!matches!(self, Segment::Literal(_))
	}

	/// Returns true for `#` segments.
	pub fn is_multi_level(&self) -> bool {
		matches!(self, Segment::MultiLevel(_))
	}
}

impl std::fmt::Display for Segment<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_wildcard())
	}
}

/// Splits and classifies every segment of a pattern.
pub fn segments(pattern: &str) -> impl Iterator<Item = Segment<'_>> {
	split(pattern).map(Segment::parse)
}

fn non_empty(name: &str) -> Option<&str> {
	if name.is_empty() { None } else { Some(name) }
}
