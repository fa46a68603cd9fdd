//! Pattern/topic compatibility check

use super::segment::{self, Segment};

/// Tests whether `topic` satisfies `pattern`.
///
/// The comparison walks the pattern only:
/// - `#` ends the walk, succeeding only if it is the last pattern segment;
/// - `+` accepts whatever sits at its position, even nothing;
/// - a literal must equal the topic segment at the same position.
///
/// Topic segments past the end of a pattern without `#` are not examined,
/// so `matches("foo", "foo/bar")` holds.
///
/// ```
/// use mqtt_pattern::matches;
///
/// assert!(matches("sensors/+/temperature", "sensors/kitchen/temperature"));
/// assert!(matches("sensors/#", "sensors/kitchen/humidity"));
/// assert!(!matches("#/temperature", "sensors/temperature"));
/// ```
pub fn matches(pattern: &str, topic: &str) -> bool {
	let topic_segments: Vec<&str> = segment::split(topic).collect();
	let mut pattern_segments = segment::segments(pattern).enumerate().peekable();

	while let Some((i, pattern_segment)) = pattern_segments.next() {
		match pattern_segment {
			| Segment::MultiLevel(_) => {
				let is_last = pattern_segments.peek().is_none();
				if !is_last {
					tracing::trace!(
						pattern,
						position = i,
						"# wildcard is not the last segment"
					);
				}
				return is_last;
			}
			| Segment::SingleLevel(_) => continue,
			| Segment::Literal(expected) => {
				if topic_segments.get(i) != Some(&expected) {
					return false;
				}
			}
		}
	}

	true
}
