//! Observability for offrank: `tracing` events, `EnvFilter`-driven setup.

pub mod setup;

pub use setup::{config_filter, init_tracing, init_tracing_from_config, init_tracing_with_filter};
