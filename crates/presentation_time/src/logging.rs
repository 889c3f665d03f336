use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{PresentationTimeError, PresentationTimeResult};

/// Initialize logging based on environment configuration
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(PresentationTimeError::LoggingInitialization)` if a global subscriber is already set
pub fn init_logging() -> PresentationTimeResult<()> {
    // Check if RUST_LOG is set, skip logging if not
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .pretty();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| PresentationTimeError::LoggingInitialization(e.to_string()))?;

    tracing::info!("Presentation time logging initialized");
    Ok(())
}
