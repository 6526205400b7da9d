use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Start logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. The returned handle
/// must be kept alive for as long as logging is needed.
pub fn init(verbosity: u8) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level(verbosity))
        .with_context(|| "Failed to parse log specification")?
        .log_to_stderr()
        .start()
        .with_context(|| "Failed to start logger")
}

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
