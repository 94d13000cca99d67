//! Log setup for the command line tool.
//!
//! The library only emits records through the `log` facade. The binary calls
//! [`initialize`] once, which installs `env_logger` writing to stderr so log
//! lines never mix with results printed on stdout.

use log::LevelFilter;

/// Map the `-v`/`-d` flags to a level filter.
pub fn level_for(verbosity: u8, debug: bool) -> LevelFilter {
	if debug {
		return LevelFilter::Trace;
	}
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. `RUST_LOG` still overrides the flag-derived
/// level for finer filtering.
pub fn initialize(level: LevelFilter) {
	let mut builder = env_logger::Builder::new();
	builder
		.filter_level(level)
		.format_timestamp(None)
		.format_target(level >= LevelFilter::Debug)
		.parse_default_env();
	// A second initialisation (tests, embedders) keeps the first logger.
	let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_level() {
		assert_eq!(level_for(0, false), LevelFilter::Warn);
		assert_eq!(level_for(1, false), LevelFilter::Info);
		assert_eq!(level_for(2, false), LevelFilter::Debug);
		assert_eq!(level_for(5, false), LevelFilter::Trace);
		assert_eq!(level_for(0, true), LevelFilter::Trace);
	}

	#[test]
	fn initialize_twice_is_harmless() {
		initialize(LevelFilter::Off);
		initialize(LevelFilter::Debug);
	}
}
