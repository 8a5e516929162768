//! This module provides observability and diagnostics for the codec.
//!
//! Library code only talks to the `log` facade. The `log_metric!` macro emits
//! structured key-value records for per-block decisions at `trace` level under
//! the `ricecomp::metrics` target, and builds its message only when that level
//! is actually enabled. Hosts that want the output without wiring their own
//! logger can call `enable_verbose_logging`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::RiceError;

/// Log target used for structured per-block metrics.
pub const METRICS_TARGET: &str = "ricecomp::metrics";

/// Logs a structured key-value metric record at `trace` level.
///
/// # Example
/// ```ignore
/// log_metric!("event"="block_coded", "block"=&index, "coding"="zero");
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if log::log_enabled!(target: $crate::observability::METRICS_TARGET, log::Level::Trace) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            log::trace!(
                target: $crate::observability::METRICS_TARGET,
                "RICECOMP_METRIC: {{ {} }}",
                parts.join(", ")
            );
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs a process-wide `env_logger` at the given level.
///
/// Output goes to stderr, or is appended to `log_file` when one is given.
/// Only the first call has any effect; a logger installed by the host
/// beforehand is left in place.
pub fn enable_verbose_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), RiceError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level, target and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        enable_verbose_logging(LevelFilter::Debug, None).unwrap();
        enable_verbose_logging(LevelFilter::Trace, None).unwrap();
        log_metric!("event" = "test", "value" = 1);
    }

    #[test]
    fn test_unopenable_log_file_is_io_error() {
        let dir = std::env::temp_dir();
        // A directory cannot be opened as an append-only file.
        let result = enable_verbose_logging(LevelFilter::Info, Some(dir.as_path()));
        assert!(matches!(result, Err(RiceError::Io(_))));
    }
}
