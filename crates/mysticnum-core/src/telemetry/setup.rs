//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-crate log directives.
pub const LOG_ENV: &str = "MYSTICNUM_LOG";

/// Initialize the MysticNUM tracing/logging system.
///
/// Reads `MYSTICNUM_LOG` for directives, e.g.
/// `MYSTICNUM_LOG=mysticnum_engine=debug,mysticnum_storage=warn`.
/// Falls back to `config.log_level` when unset or invalid.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json_logs);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber may already be installed by the host; that is not an error.
    let _ = if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}
