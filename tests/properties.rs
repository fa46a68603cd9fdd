//! Property tests for matching, cleaning and the fill/exec round trip

use mqtt_pattern::{ParamValue, TopicParams, clean, exec, fill, matches};
use proptest::prelude::*;

/// Topic level without separators or wildcard markers.
fn arb_level() -> impl Strategy<Value = String> {
	"[a-z0-9_]{0,6}"
}

fn arb_topic() -> impl Strategy<Value = String> {
	prop::collection::vec(arb_level(), 1 .. 6)
		.prop_map(|levels| levels.join("/"))
}

/// Any string built from levels, markers and separators.
fn arb_raw_pattern() -> impl Strategy<Value = String> {
	"[a-c+#/]{0,12}"
}

/// Pattern segment slot before the optional trailing `#rest`.
#[derive(Debug, Clone)]
enum Slot {
	Literal(String),
	Single,
}

fn arb_named_pattern_with_topic() -> impl Strategy<Value = (String, String)>
{
	let slot = prop_oneof![
		arb_level().prop_map(Slot::Literal),
		Just(Slot::Single),
	];
	(
		prop::collection::vec((slot, arb_level()), 1 .. 5),
		prop::option::of(prop::collection::vec(arb_level(), 0 .. 3)),
	)
		.prop_map(|(slots, tail)| {
			let mut pattern = Vec::new();
			let mut topic = Vec::new();
			for (i, (slot, value)) in slots.into_iter().enumerate() {
				match slot {
					| Slot::Literal(literal) => {
						pattern.push(literal.clone());
						topic.push(literal);
					}
					| Slot::Single => {
						pattern.push(format!("+p{i}"));
						topic.push(value);
					}
				}
			}
			if let Some(tail) = tail {
				pattern.push("#rest".to_string());
				topic.extend(tail);
			}
			(pattern.join("/"), topic.join("/"))
		})
}

proptest! {
	#[test]
	fn literal_pattern_matches_iff_equal(
		pattern in arb_topic(),
		topic in arb_topic()
	) {
		let same_depth = pattern.split('/').count() == topic.split('/').count();
		if same_depth {
			prop_assert_eq!(matches(&pattern, &topic), pattern == topic);
		}
		prop_assert!(matches(&topic, &topic));
	}

	#[test]
	fn hash_matches_everything(topic in arb_topic()) {
		prop_assert!(matches("#", &topic));
	}

	#[test]
	fn clean_is_idempotent(pattern in arb_raw_pattern()) {
		let once = clean(&pattern);
		prop_assert_eq!(clean(&once), once);
	}

	#[test]
	fn clean_keeps_segment_count(pattern in arb_raw_pattern()) {
		prop_assert_eq!(
			clean(&pattern).split('/').count(),
			pattern.split('/').count()
		);
	}

	#[test]
	fn fill_reconstructs_matched_topic(
		(pattern, topic) in arb_named_pattern_with_topic()
	) {
		prop_assert!(matches(&pattern, &topic));

		let values = exec(&pattern, &topic).unwrap();
		prop_assert_eq!(fill(&pattern, &values), topic);
	}

	#[test]
	fn fill_then_exec_recovers_single_levels(
		values in prop::collection::vec("[a-z0-9]{1,6}", 1 .. 5)
	) {
		let pattern: Vec<String> =
			(0 .. values.len()).map(|i| format!("+p{i}")).collect();
		let pattern = pattern.join("/");
		let params: TopicParams = values
			.iter()
			.enumerate()
			.map(|(i, v)| (format!("p{i}"), ParamValue::from(v.as_str())))
			.collect();

		let topic = fill(&pattern, &params);
		prop_assert_eq!(exec(&pattern, &topic), Some(params));
	}
}
