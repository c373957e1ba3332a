//! Subscriber setup for binaries built on this crate.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! binary installs a subscriber through [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset or unparsable.
///
/// ```bash
/// RUST_LOG=classic_algorithms=trace cargo run --bin showcase
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
