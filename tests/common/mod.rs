use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Uses `with_test_writer()`, so output is captured per-test and only shown
/// for failing tests (or with `-- --nocapture`).
///
/// The default filter keeps poll-round logs visible, since those are usually
/// the first thing needed when a change-detection test fails. Override with
/// `RUST_LOG`, e.g. `RUST_LOG=trace cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("watchurl=debug,info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
