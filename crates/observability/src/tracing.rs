//! Tracing/logging initialization.
//!
//! Logs go to stderr so an interactive session on stdout stays readable.

use tracing_subscriber::EnvFilter;

/// Rendering of log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogOutput {
    #[default]
    Text,
    /// JSON lines with timestamps.
    Json,
}

impl LogOutput {
    /// `json` (any case) selects JSON; anything else is text.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogOutput::Json
        } else {
            LogOutput::Text
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(default_filter: &str, output: LogOutput) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match output {
        LogOutput::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogOutput::Text => builder.try_init(),
    };
}
