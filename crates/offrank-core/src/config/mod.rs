//! Configuration system for offrank.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod function_config;
pub mod logging_config;
pub mod offrank_config;

pub use function_config::FunctionConfig;
pub use logging_config::LoggingConfig;
pub use offrank_config::OffrankConfig;
