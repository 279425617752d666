//! Subscriber installation for hosts embedding offrank.
//!
//! The filter comes from, in order of use: an explicit directive string,
//! the `[logging] filter` config value, or `OFFRANK_LOG`. Unparsable
//! directives fall back to `offrank=info`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::OffrankConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a subscriber filtered by `OFFRANK_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Install a subscriber filtered by the loaded config's `[logging] filter`.
pub fn init_tracing_from_config(config: &OffrankConfig) {
    install(config_filter(config));
}

/// Install a subscriber with an explicit directive string.
pub fn init_tracing_with_filter(directives: &str) {
    install(parse_filter(directives));
}

/// The `EnvFilter` a config would install.
pub fn config_filter(config: &OffrankConfig) -> EnvFilter {
    parse_filter(config.logging.effective_filter())
}

fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

// First call wins; a subscriber the host installed itself is left in place.
fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
