//! SQL function registration configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FUNCTION_NAME;

/// How the scoring function is exposed to the host engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FunctionConfig {
    /// SQL-visible function name. Default: "offsets_rank".
    pub name: Option<String>,
    /// Register as deterministic so the planner may cache results. Default: true.
    pub deterministic: Option<bool>,
}

impl FunctionConfig {
    /// Returns the effective function name, defaulting to `offsets_rank`.
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_FUNCTION_NAME)
    }

    /// Returns the effective determinism flag, defaulting to true.
    pub fn effective_deterministic(&self) -> bool {
        self.deterministic.unwrap_or(true)
    }
}
