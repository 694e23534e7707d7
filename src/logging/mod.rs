// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for structured logging
///
/// The subscriber is configured with:
/// - JSON formatting for easy parsing by log aggregation systems
/// - Filtering from `RUST_LOG`, defaulting to `info`
/// - Output to stderr so generated URLs on stdout stay clean
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
///
/// # Examples
///
/// ```
/// use thumbor_url::logging::init_subscriber;
///
/// init_subscriber().expect("Failed to initialize logging");
/// init_subscriber().expect("Second initialization is a no-op");
///
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    // A global subscriber may already be set, by an earlier call or a test harness
    let _ = fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    Ok(())
}
