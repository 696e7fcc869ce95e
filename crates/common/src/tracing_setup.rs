use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{ExposureError, Result};

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
///
/// Fails if a subscriber is already installed, which callers may ignore.
pub fn init_tracing_with_level(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ExposureError::Config(format!("tracing already initialised: {}", e)))?;

    debug!("Tracing initialized with level: {}", level);
    Ok(())
}
