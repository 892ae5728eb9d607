//! Tracing output for tests
//!
//! Routes spans and events through the libtest capture so they only show up
//! for failing tests. Honors `RUST_LOG`, defaulting to `debug` for the
//! workspace crates.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the test subscriber. Safe to call from every test.
pub fn init_test_tracing() {
  INIT.call_once(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghorg=debug,ghorg_gh=debug"));
    // Another harness may have installed a global subscriber already
    let _ = tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_test_writer()
      .try_init();
  });
}
