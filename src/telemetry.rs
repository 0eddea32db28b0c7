//! Diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "PATTERN_STATS_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `PATTERN_STATS_LOG`
/// (e.g. `PATTERN_STATS_LOG=pattern_stats=debug`). Falls back to warnings
/// only. Stdout is reserved for command output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("pattern_stats=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
