//! Configuration for compiled topic patterns

use std::num::NonZeroUsize;

/// Caching of match results for a compiled [`TopicPattern`].
///
/// [`TopicPattern`]: crate::TopicPattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStrategy {
	/// Every call evaluates the pattern
	#[default]
	NoCache,
	/// Keep up to N most recently seen topics
	Lru(NonZeroUsize),
}

impl CacheStrategy {
	/// LRU cache of `capacity` entries; a zero capacity disables caching.
	pub fn new(capacity: usize) -> Self {
		match NonZeroUsize::new(capacity) {
			| Some(capacity) => CacheStrategy::Lru(capacity),
			| None => CacheStrategy::NoCache,
		}
	}

	/// Returns the cache capacity, 0 when caching is disabled.
	pub fn capacity(&self) -> usize {
		match self {
			| CacheStrategy::NoCache => 0,
			| CacheStrategy::Lru(capacity) => capacity.get(),
		}
	}
}
