use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// The level comes from `RUST_LOG`, falling back to `info`. Targets and
/// timestamps are left out since CloudWatch records the ingestion time.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
