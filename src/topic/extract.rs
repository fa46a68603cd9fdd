//! Parameter extraction from a topic

use super::matcher::matches;
use super::params::{ParamValue, TopicParams};
use super::segment::{self, Segment};

/// Extracts wildcard parameters from `topic` without checking that it
/// matches `pattern`.
///
/// Named `+` wildcards bind the topic segment at their position; a named `#`
/// binds every remaining topic segment and ends extraction. Unnamed
/// wildcards bind nothing. A `+name` past the end of the topic is left
/// unbound. When a name repeats, the later binding wins.
///
/// Prefer [`exec`] unless the match has already been established.
pub fn extract(pattern: &str, topic: &str) -> TopicParams {
	let topic_segments: Vec<&str> = segment::split(topic).collect();
	let mut params = TopicParams::new();

	for (i, pattern_segment) in segment::segments(pattern).enumerate() {
		match pattern_segment {
			| Segment::SingleLevel(Some(name)) => {
				if let Some(value) = topic_segments.get(i) {
					params.insert(name, *value);
				}
			}
			| Segment::MultiLevel(Some(name)) => {
				let rest = topic_segments.get(i ..).unwrap_or_default();
				let levels = rest.iter().map(|s| s.to_string()).collect();
				params.insert(name, ParamValue::Multi(levels));
				break;
			}
			// A bare `#` binds nothing and, unlike a named one, does not
			// stop the walk.
			| Segment::SingleLevel(None)
			| Segment::MultiLevel(None)
			| Segment::Literal(_) => {}
		}
	}

	params
}

/// Matches `topic` against `pattern` and extracts its parameters.
///
/// Returns `None` when the topic does not match.
///
/// ```
/// use mqtt_pattern::{exec, ParamValue};
///
/// let params = exec("devices/+id/#path", "devices/lamp/state/on").unwrap();
/// assert_eq!(params.single("id"), Some("lamp"));
/// assert_eq!(params.get("path"), Some(&ParamValue::from(["state", "on"])));
///
/// assert!(exec("devices/+id", "sensors/lamp").is_none());
/// ```
pub fn exec(pattern: &str, topic: &str) -> Option<TopicParams> {
	if matches(pattern, topic) {
		Some(extract(pattern, topic))
	} else {
		None
	}
}
