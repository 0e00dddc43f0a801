//! Structured logging for the binary.
//!
//! The library only emits `tracing` events; this module installs the subscriber.
//! Output goes to stderr so it never interleaves with rendered lists on stdout.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive.
///
/// Priority: `RUST_LOG` > `--verbose` > config `log_level` > [`DEFAULT_LOG_LEVEL`].
/// Returns `None` when `RUST_LOG` should be used as-is.
pub fn filter_directive(
    rust_log_set: bool,
    verbose: bool,
    config_level: Option<&str>,
) -> Option<String> {
    if rust_log_set {
        None
    } else if verbose {
        Some("debug".to_string())
    } else {
        Some(config_level.unwrap_or(DEFAULT_LOG_LEVEL).to_string())
    }
}

/// Initialise the logging subsystem. Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let rust_log_set = std::env::var("RUST_LOG").is_ok();
    let filter = match filter_directive(rust_log_set, verbose, config_level) {
        None => EnvFilter::from_default_env(),
        Some(directive) => {
            EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = env!("CARGO_PKG_NAME"),
            version = env!("CARGO_PKG_VERSION"),
            "Logging initialised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(filter_directive(true, true, Some("trace")), None);
    }

    #[test]
    fn verbose_beats_config() {
        assert_eq!(
            filter_directive(false, true, Some("error")).as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn config_level_then_default() {
        assert_eq!(
            filter_directive(false, false, Some("info")).as_deref(),
            Some("info")
        );
        assert_eq!(
            filter_directive(false, false, None).as_deref(),
            Some(DEFAULT_LOG_LEVEL)
        );
    }
}
