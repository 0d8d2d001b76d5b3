//! Logger setup for lrng-cmd

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Maps the `-v` count to a level filter for the lrng crates.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Logs go to stderr so that JSON written to
/// stdout stays machine-readable. `RUST_LOG` overrides the defaults.
pub fn initialize_logger(verbosity: u8) {
    INIT.call_once_force(|_| {
        let level = level_for(verbosity);
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("lrng_cmd", level)
            .filter_module("lrng_coalesce", level)
            .format_timestamp_millis()
            .parse_default_env();

        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Info);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(5), LevelFilter::Trace);
    }

    #[test]
    fn test_initialize_twice() {
        initialize_logger(0);
        initialize_logger(2);
        log::info!("logger initialized");
    }
}
