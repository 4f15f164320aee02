use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CFRELEASE_LOG=cfrelease=debug`.
pub const LOG_ENV: &str = "CFRELEASE_LOG";

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
