//! Tracing setup for applications embedding ghorg.

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a `-v` count to the most verbose level that should be shown
pub const fn level_for_verbosity(verbose_count: u8) -> Level {
  match verbose_count {
    0 => Level::WARN,  // Default: warnings and errors
    1 => Level::INFO,  // -v: info, warnings, and errors
    2 => Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => Level::TRACE, // -vvv or more: trace and everything else
  }
}

/// Install a global fmt subscriber filtered by `RUST_LOG` plus the given
/// verbosity.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbose_count: u8) -> Result<(), TryInitError> {
  let level = level_for_verbosity(verbose_count);

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .try_init()?;

  tracing::debug!("Tracing initialized with level: {}", level);
  Ok(())
}
