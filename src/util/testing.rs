//! Shared logging setup for tests.

use std::env;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Initializes the global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to `debug`, and writes to stderr so test
/// output capture stays clean.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_err() {
            // Another harness already installed a subscriber.
            return;
        }
        info!("Test setup complete (RUST_LOG={:?})", env::var("RUST_LOG").ok());
    });
}
