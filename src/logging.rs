//! Logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//!
//! ## Filter priority
//!
//! 1. **`LINETEXT_LOG`** — linetext-specific filter
//! 2. **`RUST_LOG`** — standard tracing filter
//! 3. **Default** — `warn`, or `debug` with `--verbose`

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place.
pub fn init(verbose: bool) {
    let directive = filter_directive(
        verbose,
        env::var("LINETEXT_LOG").ok(),
        env::var("RUST_LOG").ok(),
    );
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Pick the filter directive by priority.
fn filter_directive(
    verbose: bool,
    linetext_log: Option<String>,
    rust_log: Option<String>,
) -> String {
    let set = |d: &String| !d.trim().is_empty();
    linetext_log
        .filter(set)
        .or_else(|| rust_log.filter(set))
        .unwrap_or_else(|| default_level(verbose).to_string())
}

const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(filter_directive(false, None, None), "warn");
        assert_eq!(filter_directive(true, None, None), "debug");
    }

    #[test]
    fn linetext_log_wins() {
        let d = filter_directive(true, Some("trace".into()), Some("info".into()));
        assert_eq!(d, "trace");
    }

    #[test]
    fn rust_log_beats_default() {
        assert_eq!(filter_directive(true, None, Some("info".into())), "info");
    }

    #[test]
    fn blank_is_unset() {
        assert_eq!(filter_directive(false, Some("  ".into()), None), "warn");
        assert_eq!(filter_directive(false, Some(String::new()), Some("info".into())), "info");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
