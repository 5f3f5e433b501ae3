use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` wins, otherwise `fallback` (for example
/// `warn` or `pokertrack_engine=debug`). Unparseable directives fall back to
/// `warn`.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize logging to stderr. Later calls are no-ops.
pub fn init_logging(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
