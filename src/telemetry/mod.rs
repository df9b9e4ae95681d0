//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Configure with RUST_LOG, e.g.:
/// RUST_LOG=debug,tower_http=info,axum=info
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info,axum=info".into()),
        )
        .with_target(true)
        .init();
}
