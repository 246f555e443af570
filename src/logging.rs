//! Tracing setup for the command-line binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, defaulting
/// to `warn`.
///
/// ```bash
/// RUST_LOG=index_permute=debug index-permute table 10
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
