//! Compiled topic pattern with parameter schema and optional match cache

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use arcstr::{ArcStr, Substr};
use lru::LruCache;
use smallvec::SmallVec;
use thiserror::Error;

use super::clean::clean;
use super::extract::extract;
use super::fill::{TopicFillError, fill, try_fill};
use super::matcher::matches;
use super::params::{ParamKind, TopicParams};
use super::segment::{self, Segment};
use crate::config::CacheStrategy;

/// Error types for topic pattern compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicPatternError {
	/// Empty pattern is not valid
	#[error("Topic pattern cannot be empty")]
	EmptyPattern,

	/// Hash wildcard (#) used not at the end of the pattern
	#[error(
		"Invalid topic pattern '{pattern}': # wildcard can only be the last \
		 segment"
	)]
	HashPosition {
		/// The invalid pattern
		pattern: String,
	},

	/// The same parameter name appears on two wildcards
	#[error("Duplicate parameter '{name}' in topic pattern '{pattern}'")]
	DuplicateParameter {
		/// Repeated parameter name
		name: String,
		/// The invalid pattern
		pattern: String,
	},

	/// Topic pattern structure mismatch when checking compatibility
	#[error(
		"Topic pattern structure mismatch.\nOriginal: '{original}'\nCustom:   \
		 '{custom}'\nHint: Both patterns must have the same parameter \
		 structure (same wildcards in same positions)"
	)]
	PatternStructureMismatch {
		/// Pattern compared against
		original: String,
		/// Pattern that doesn't match
		custom: String,
	},
}

impl TopicPatternError {
	/// Creates a new HashPosition error
	pub fn hash_position(pattern: impl Into<String>) -> Self {
		Self::HashPosition {
			pattern: pattern.into(),
		}
	}

	/// Creates a new DuplicateParameter error
	pub fn duplicate_parameter(
		name: impl Into<String>,
		pattern: impl Into<String>,
	) -> Self {
		Self::DuplicateParameter {
			name: name.into(),
			pattern: pattern.into(),
		}
	}

	/// Creates a new PatternStructureMismatch error
	pub fn pattern_mismatch(
		original: impl Into<String>,
		custom: impl Into<String>,
	) -> Self {
		Self::PatternStructureMismatch {
			original: original.into(),
			custom: custom.into(),
		}
	}
}

impl From<std::convert::Infallible> for TopicPatternError {
	fn from(never: std::convert::Infallible) -> Self {
		match never {}
	}
}

type MatchCache = LruCache<ArcStr, Option<Arc<TopicParams>>>;

/// Validated topic pattern, ready to be matched many times.
///
/// Unlike the free functions, compilation rejects patterns whose `#` is not
/// last and patterns that reuse a parameter name. Matching, extraction and
/// filling then behave exactly like [`matches`](crate::matches),
/// [`extract`](crate::extract), [`fill`](crate::fill) and
/// [`try_fill`](crate::try_fill).
#[derive(Debug)]
pub struct TopicPattern {
	template_pattern: ArcStr, // pattern as written: "sensors/+id/data"
	subscription_pattern: ArcStr, // names stripped: "sensors/+/data"
	schema: SmallVec<[(Substr, ParamKind); 4]>,
	segment_count: usize,
	/// Optional LRU cache of `exec` results keyed by topic.
	///
	/// `Mutex` keeps the pattern `Send + Sync`; a poisoned lock is bypassed.
	match_cache: Option<Mutex<MatchCache>>,
}

impl Clone for TopicPattern {
	fn clone(&self) -> Self {
		Self {
			template_pattern: self.template_pattern.clone(),
			subscription_pattern: self.subscription_pattern.clone(),
			schema: self.schema.clone(),
			segment_count: self.segment_count,
			match_cache: Self::new_cache(self.cache_strategy()),
		}
	}
}

impl TopicPattern {
	/// Compiles a topic pattern with the given caching.
	pub fn new(
		pattern: impl Into<ArcStr>,
		cache_strategy: CacheStrategy,
	) -> Result<Self, TopicPatternError> {
		let pattern = pattern.into();
		if pattern.trim().is_empty() {
			return Err(TopicPatternError::EmptyPattern);
		}

		let mut schema: SmallVec<[(Substr, ParamKind); 4]> =
			SmallVec::new();
		let mut segment_count = 0;
		{
			let mut seen_names = HashSet::new();
			let mut hash_seen = false;

			for segment in segment::segments(&pattern) {
				if hash_seen {
					return Err(TopicPatternError::hash_position(
						pattern.as_str(),
					));
				}
				segment_count += 1;

				let kind = match segment {
					| Segment::Literal(_) => continue,
					| Segment::SingleLevel(_) => ParamKind::Single,
					| Segment::MultiLevel(_) => {
						hash_seen = true;
						ParamKind::Multi
					}
				};
				if let Some(name) = segment.param_name() {
					if !seen_names.insert(name) {
						return Err(TopicPatternError::duplicate_parameter(
							name,
							pattern.as_str(),
						));
					}
					schema.push((pattern.substr_from(name), kind));
				}
			}
		}

		tracing::debug!(
			pattern = %pattern,
			parameters = schema.len(),
			cache = cache_strategy.capacity(),
			"Compiled topic pattern"
		);

		Ok(Self {
			subscription_pattern: ArcStr::from(clean(&pattern)),
			template_pattern: pattern,
			schema,
			segment_count,
			match_cache: Self::new_cache(cache_strategy),
		})
	}

	fn new_cache(cache_strategy: CacheStrategy) -> Option<Mutex<MatchCache>> {
		match cache_strategy {
			| CacheStrategy::Lru(capacity) => {
				Some(Mutex::new(LruCache::new(capacity)))
			}
			| CacheStrategy::NoCache => None,
		}
	}

	/// Get the cache strategy of this topic pattern.
	pub fn cache_strategy(&self) -> CacheStrategy {
		match &self.match_cache {
			| Some(cache_mutex) => match cache_mutex.lock() {
				| Ok(cache) => CacheStrategy::Lru(cache.cap()),
				| Err(poisoned) => {
					CacheStrategy::Lru(poisoned.get_ref().cap())
				}
			},
			| None => CacheStrategy::NoCache,
		}
	}

	/// Create new pattern with different cache strategy
	pub fn with_cache_strategy(&self, cache_strategy: CacheStrategy) -> Self {
		Self {
			match_cache: Self::new_cache(cache_strategy),
			..self.clone()
		}
	}

	/// Returns the pattern as written, parameter names included.
	pub fn as_str(&self) -> &str {
		&self.template_pattern
	}

	/// Returns the pattern with names stripped, for broker subscription.
	pub fn subscription_pattern(&self) -> ArcStr {
		self.subscription_pattern.clone()
	}

	/// Returns an iterator over the classified segments.
	pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
		segment::segments(&self.template_pattern)
	}

	/// Returns number of segments in pattern.
	pub fn len(&self) -> usize {
		self.segment_count
	}

	/// Always false: a compiled pattern has at least one segment.
	pub fn is_empty(&self) -> bool {
		self.segment_count == 0
	}

	/// Returns true if pattern ends with a multi-level wildcard (#).
	pub fn contains_multi_level(&self) -> bool {
		self.segments().last().is_some_and(|s| s.is_multi_level())
	}

	/// Named parameters and their shapes, in pattern order.
	pub fn schema(&self) -> &[(Substr, ParamKind)] {
		&self.schema
	}

	/// Names of the named wildcards, in pattern order.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.schema.iter().map(|(name, _)| name.as_str())
	}

	/// Tests whether `topic` satisfies this pattern.
	pub fn matches(&self, topic: &str) -> bool {
		matches(&self.template_pattern, topic)
	}

	/// Extracts parameters without checking the match first.
	pub fn extract(&self, topic: &str) -> TopicParams {
		extract(&self.template_pattern, topic)
	}

	/// Matches `topic` and extracts its parameters, using the cache if any.
	pub fn exec(&self, topic: &str) -> Option<Arc<TopicParams>> {
		let Some(cache_mutex) = &self.match_cache else {
			return self.exec_uncached(topic);
		};

		if let Ok(mut cache) = cache_mutex.lock() {
			if let Some(cached) = cache.get(topic) {
				tracing::trace!(
					pattern = %self.template_pattern,
					topic,
					"Match cache hit"
				);
				return cached.clone();
			}
		}

		let result = self.exec_uncached(topic);
		if let Ok(mut cache) = cache_mutex.lock() {
			cache.put(ArcStr::from(topic), result.clone());
		}
		result
	}

	fn exec_uncached(&self, topic: &str) -> Option<Arc<TopicParams>> {
		if self.matches(topic) {
			Some(Arc::new(self.extract(topic)))
		} else {
			None
		}
	}

	/// Builds a topic from `params`, see [`fill`](crate::fill).
	pub fn fill(&self, params: &TopicParams) -> String {
		fill(&self.template_pattern, params)
	}

	/// Strictly builds a topic from `params`, see
	/// [`try_fill`](crate::try_fill).
	pub fn try_fill(
		&self,
		params: &TopicParams,
	) -> Result<String, TopicFillError> {
		try_fill(&self.template_pattern, params)
	}

	/// Checks if the provided topic pattern is compatible with this one.
	///
	/// Literal segments can differ, but wildcards must be identical in kind,
	/// order, and names (if named).
	pub fn check_compatibility(
		&self,
		custom_pattern: impl TryInto<TopicPattern, Error: Into<TopicPatternError>>,
	) -> Result<Self, TopicPatternError> {
		let candidate = custom_pattern.try_into().map_err(Into::into)?;
		let self_wildcards = self.segments().filter(Segment::is_wildcard);
		let candidate_wildcards =
			candidate.segments().filter(Segment::is_wildcard);

		if !self_wildcards.eq(candidate_wildcards) {
			return Err(TopicPatternError::pattern_mismatch(
				self.template_pattern.as_str(),
				candidate.template_pattern.as_str(),
			));
		}

		Ok(candidate)
	}
}

impl fmt::Display for TopicPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.template_pattern)
	}
}

impl FromStr for TopicPattern {
	type Err = TopicPatternError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s, CacheStrategy::NoCache)
	}
}

impl TryFrom<&str> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value, CacheStrategy::NoCache)
	}
}

impl TryFrom<String> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value, CacheStrategy::NoCache)
	}
}

impl TryFrom<ArcStr> for TopicPattern {
	type Error = TopicPatternError;

	fn try_from(value: ArcStr) -> Result<Self, Self::Error> {
		Self::new(value, CacheStrategy::NoCache)
	}
}
