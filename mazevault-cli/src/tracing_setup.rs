//! Tracing setup for the mazevault CLI
//!
//! Usage:
//!   mazevault --debug serve           # Debug logging to console
//!   RUST_LOG=mazevault=debug ...      # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects debug level and
/// the default is info.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
