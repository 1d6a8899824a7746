//! Diagnostics via `RUST_LOG`, written to stderr so stdout stays the
//! command's result.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Defaults to `warn` when `RUST_LOG` is
/// unset.
///
/// ```bash
/// RUST_LOG=url_shortener_client=debug url-shortener-client https://a.com ok-code
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
