//! Pattern normalization for broker subscriptions

use super::segment::{self, SEPARATOR};

/// Strips parameter names from wildcards: `a/+id/#rest` becomes `a/+/#`.
///
/// Literal segments are kept as they are, so the result is suitable for a
/// raw subscription. Cleaning an already clean pattern returns it unchanged.
pub fn clean(pattern: &str) -> String {
	let mut cleaned = String::with_capacity(pattern.len());
	for (i, segment) in segment::segments(pattern).enumerate() {
		if i > 0 {
			cleaned.push(SEPARATOR);
		}
		cleaned.push_str(segment.as_str());
	}
	cleaned
}
