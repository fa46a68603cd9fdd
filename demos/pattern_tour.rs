//! Walk through matching, extraction, filling and cleaning.
//!
//! ```bash
//! RUST_LOG=mqtt_pattern=trace cargo run --example pattern_tour
//! ```

use mqtt_pattern::{
	CacheStrategy, TopicParams, TopicPattern, clean, exec, fill, matches,
	try_fill,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing from `RUST_LOG`; silent when it is not set.
fn setup_tracing() {
	if std::env::var("RUST_LOG").is_err() {
		return;
	}
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| "info".into());

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	setup_tracing();

	let pattern = "home/+room/sensors/#metric";
	let topic = "home/kitchen/sensors/temperature/celsius";

	println!("pattern:      {pattern}");
	println!("subscription: {}", clean(pattern));
	println!("topic:        {topic}");
	println!("matches:      {}", matches(pattern, topic));

	if let Some(params) = exec(pattern, topic) {
		println!("room:         {:?}", params.single("room"));
		println!("metric:       {:?}", params.multi("metric"));
		println!("refilled:     {}", fill(pattern, &params));
	}

	let params = TopicParams::new()
		.with("room", "garage")
		.with("metric", ["humidity"]);
	println!("filled:       {}", try_fill(pattern, &params)?);

	match try_fill(pattern, &TopicParams::new()) {
		| Ok(topic) => println!("unexpected:   {topic}"),
		| Err(err) => println!("strict fill:  {err}"),
	}
	println!("lenient fill: {}", fill(pattern, &TopicParams::new()));

	let compiled = TopicPattern::new(pattern, CacheStrategy::new(16))?;
	for topic in [
		"home/kitchen/sensors/temperature",
		"home/kitchen/sensors/temperature",
		"office/desk/sensors/light",
	] {
		let result = compiled.exec(topic);
		println!("{topic:<36} -> {result:?}");
	}

	if let Err(err) = TopicPattern::try_from("home/#rest/sensors") {
		println!("rejected:     {err}");
	}

	Ok(())
}
