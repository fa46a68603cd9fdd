//! Tests for topic filling and pattern cleaning

use super::clean::clean;
use super::fill::{TopicFillError, fill, try_fill};
use super::params::{ParamKind, TopicParams};

mod lenient_fill_tests {
	use super::*;

	#[test]
	fn test_both_wildcard_kinds() {
		let params = TopicParams::new()
			.with("hello", "Hello")
			.with("world", ["the", "world", "wow"]);

		assert_eq!(
			fill("foo/+hello/#world", &params),
			"foo/Hello/the/world/wow"
		);
	}

	#[test]
	fn test_missing_single_level_writes_undefined() {
		assert_eq!(fill("foo/+hello", &TopicParams::new()), "foo/undefined");
	}

	#[test]
	fn test_unnamed_single_level_writes_undefined() {
		assert_eq!(fill("foo/+", &TopicParams::new()), "foo/undefined");
	}

	#[test]
	fn test_missing_multi_level_is_dropped() {
		assert_eq!(fill("foo/#hello", &TopicParams::new()), "foo");
	}

	#[test]
	fn test_unnamed_multi_level_is_dropped() {
		assert_eq!(fill("foo/#", &TopicParams::new()), "foo");
	}

	#[test]
	fn test_empty_multi_level_is_dropped() {
		let params = TopicParams::new().with("rest", Vec::<String>::new());
		assert_eq!(fill("foo/#rest", &params), "foo");
	}

	#[test]
	fn test_only_multi_level_dropped_yields_empty_topic() {
		assert_eq!(fill("#", &TopicParams::new()), "");
	}

	#[test]
	fn test_literals_are_copied() {
		assert_eq!(fill("/foo//bar", &TopicParams::new()), "/foo//bar");
	}

	#[test]
	fn test_unnamed_wildcards_use_empty_name() {
		let params = TopicParams::new().with("", "anon");
		assert_eq!(fill("foo/+/bar", &params), "foo/anon/bar");
	}

	#[test]
	fn test_mis_shaped_values_still_render() {
		let params = TopicParams::new()
			.with("id", ["a", "b"])
			.with("rest", "tail");

		assert_eq!(fill("x/+id/#rest", &params), "x/a,b/tail");
	}

	#[test]
	fn test_extra_parameters_are_ignored() {
		let params = TopicParams::new().with("id", "1").with("unused", "2");
		assert_eq!(fill("devices/+id", &params), "devices/1");
	}
}

mod try_fill_tests {
	use super::*;

	#[test]
	fn test_fills_complete_parameters() {
		let params = TopicParams::new()
			.with("hello", "Hello")
			.with("world", ["the", "world"]);

		assert_eq!(
			try_fill("foo/+hello/#world", &params),
			Ok("foo/Hello/the/world".to_string())
		);
	}

	#[test]
	fn test_missing_single_level_is_an_error() {
		assert_eq!(
			try_fill("foo/+hello", &TopicParams::new()),
			Err(TopicFillError::missing_parameter("hello"))
		);
	}

	#[test]
	fn test_unnamed_single_level_is_an_error() {
		assert_eq!(
			try_fill("foo/bar/+", &TopicParams::new()),
			Err(TopicFillError::UnnamedWildcard { position: 2 })
		);
	}

	#[test]
	fn test_missing_multi_level_is_zero_levels() {
		assert_eq!(
			try_fill("foo/#rest", &TopicParams::new()),
			Ok("foo".to_string())
		);
		assert_eq!(
			try_fill("foo/#", &TopicParams::new()),
			Ok("foo".to_string())
		);
	}

	#[test]
	fn test_shape_mismatch() {
		let params = TopicParams::new().with("id", ["a", "b"]);
		assert_eq!(
			try_fill("x/+id", &params),
			Err(TopicFillError::shape_mismatch("id", ParamKind::Single))
		);

		let params = TopicParams::new().with("rest", "tail");
		assert_eq!(
			try_fill("x/#rest", &params),
			Err(TopicFillError::shape_mismatch("rest", ParamKind::Multi))
		);
	}

	#[test]
	fn test_error_messages() {
		assert_eq!(
			TopicFillError::missing_parameter("id").to_string(),
			"Missing value for parameter 'id'"
		);
		assert_eq!(
			TopicFillError::shape_mismatch("id", ParamKind::Multi).to_string(),
			"Parameter 'id' expects a multi-level value"
		);
	}
}

mod clean_tests {
	use super::*;

	#[test]
	fn test_removes_parameter_names() {
		assert_eq!(clean("hello/+param1/world/#param2"), "hello/+/world/#");
	}

	#[test]
	fn test_without_parameter_names() {
		assert_eq!(clean("hello/+/world/#"), "hello/+/world/#");
	}

	#[test]
	fn test_literals_untouched() {
		assert_eq!(clean("a+b/c#d//"), "a+b/c#d//");
		assert_eq!(clean(""), "");
	}

	#[test]
	fn test_misplaced_hash_is_still_cleaned() {
		assert_eq!(clean("#all/+x"), "#/+");
	}

	#[test]
	fn test_idempotent() {
		for pattern in ["a/+b/#c", "+/+", "##/++", "", "/", "x/#"] {
			let once = clean(pattern);
			assert_eq!(clean(&once), once, "pattern {pattern:?}");
		}
	}
}
