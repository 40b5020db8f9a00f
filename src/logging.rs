//! Logging infrastructure for lsext.
//!
//! Structured logging uses the `log` facade and `env_logger` backend, always
//! writing to stderr so that diagnostics never interleave with the listing on
//! stdout. Log levels are determined by (in priority order):
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. CLI flags: `--quiet` (error only) or `--verbose` (debug/trace)
//! 3. Default: warn level
//!
//! # Example
//!
//! ```rust,no_run
//! use lsext::logging::init_logging;
//!
//! // Initialize with verbose mode (-v)
//! init_logging(1, false);
//! log::debug!("Listing started");
//! ```

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Initialize the logging subsystem based on CLI verbosity flags.
///
/// Must be called at most once per process. Later calls are ignored rather
/// than panicking, so tests that drive [`crate::run_app`] repeatedly stay safe.
///
/// # Arguments
///
/// * `verbose` - Verbosity count from CLI (0=warn, 1=debug, 2+=trace)
/// * `quiet` - If true, only show errors (overridden by RUST_LOG)
pub fn init_logging(verbose: u8, quiet: bool) {
    let use_env = env::var("RUST_LOG").is_ok();

    let mut builder = Builder::new();
    builder.target(Target::Stderr);

    if use_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    configure_format(&mut builder, verbose);

    if builder.try_init().is_err() {
        return;
    }

    if use_env {
        log::debug!(
            "Logging initialized from RUST_LOG environment variable: {:?}",
            env::var("RUST_LOG").ok()
        );
    } else {
        log::debug!(
            "Logging initialized at level: {:?}",
            determine_level(verbose, quiet)
        );
    }
}

/// Determine the log level from CLI flags.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configure the log format based on build type and verbosity.
///
/// - Debug builds: timestamp, level, and module path when verbose
/// - Release builds: compact format (level + message only)
fn configure_format(builder: &mut Builder, verbose: u8) {
    #[cfg(debug_assertions)]
    {
        builder.format(move |buf, record| {
            let timestamp = buf.timestamp_seconds();
            let level = record.level();
            let level_style = buf.default_level_style(level);

            if verbose >= 1 {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} [{}] {}",
                    timestamp,
                    level,
                    record.module_path().unwrap_or("unknown"),
                    record.args()
                )
            } else {
                writeln!(
                    buf,
                    "{} {level_style}{:<5}{level_style:#} {}",
                    timestamp,
                    level,
                    record.args()
                )
            }
        });
    }

    #[cfg(not(debug_assertions))]
    {
        let _ = verbose;
        builder.format(|buf, record| {
            let level = record.level();
            let level_style = buf.default_level_style(level);
            writeln!(
                buf,
                "{level_style}{:<5}{level_style:#} {}",
                level,
                record.args()
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_level_default() {
        assert_eq!(determine_level(0, false), LevelFilter::Warn);
    }

    #[test]
    fn test_determine_level_verbose() {
        assert_eq!(determine_level(1, false), LevelFilter::Debug);
    }

    #[test]
    fn test_determine_level_trace() {
        assert_eq!(determine_level(2, false), LevelFilter::Trace);
        assert_eq!(determine_level(5, false), LevelFilter::Trace);
    }

    #[test]
    fn test_determine_level_quiet_overrides_verbose() {
        assert_eq!(determine_level(0, true), LevelFilter::Error);
        assert_eq!(determine_level(2, true), LevelFilter::Error);
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(0, false);
        init_logging(1, false);
    }
}
