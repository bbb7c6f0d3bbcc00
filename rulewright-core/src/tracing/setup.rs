//! Subscriber installation for the rule engine's diagnostics.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_DIRECTIVES, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RULEWRIGHT_LOG`.
///
/// `RULEWRIGHT_LOG=rulewright_engine::matcher=trace` shows every pattern
/// attempt; an unset or unparseable value falls back to
/// [`DEFAULT_LOG_DIRECTIVES`]. Only the first call has any effect, and an
/// already installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
