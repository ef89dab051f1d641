use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`, so normal runs
/// only print command output on stdout.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("urlrec logging initialized");
}
