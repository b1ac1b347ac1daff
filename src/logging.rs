//! Sets up the tracing subscriber for the binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber that writes to stderr, keeping stdout free for output.
///
/// The level comes from `RUST_LOG` when set, otherwise `default_directive`,
/// e.g. `"info"`.
pub fn setup_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stderr_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .init();
}
