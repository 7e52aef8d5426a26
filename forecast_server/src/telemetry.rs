//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "GRIDCAST_LOG";

/// Filter used when `GRIDCAST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "forecast_server=info,forecast_core=info,tower_http=info";

static INIT: Once = Once::new();

/// Initialize logging to stdout.
///
/// Reads `GRIDCAST_LOG` for filter directives, e.g.
/// `GRIDCAST_LOG=forecast_core=debug,tower_http=debug`.
/// Falls back to `info` for this workspace's crates if unset or invalid.
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
