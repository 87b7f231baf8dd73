//! Tracing/logging setup for the service process.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines on stdout, filtering
/// driven by `RUST_LOG` with `info` as the floor when unset.
///
/// Idempotent; a second caller loses the install race and becomes a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
