//! Tracing subscriber setup
//!
//! Log level comes from `RUST_LOG`; without it, `default_directive` applies.
//!
//! ```bash
//! RUST_LOG=debug library-api serve
//! RUST_LOG=library_api::http_server=trace library-api serve
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. A second call is a no-op.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
