//! Opt-in JSON trace log (`trace` feature). Without the feature every
//! `tracing` call in the crate compiles to nothing and this is a no-op.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

/// File created in the log directory.
pub const TRACE_FILE_NAME: &str = "lex-translit-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the global subscriber writing to `log_dir`/[`TRACE_FILE_NAME`].
/// Only the first call has any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // flushed for the life of the host process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lex_translit=debug")),
            )
            .init();
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[test]
    fn creates_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        assert!(dir.path().join(TRACE_FILE_NAME).exists());
    }
}
