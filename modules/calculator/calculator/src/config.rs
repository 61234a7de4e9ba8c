use serde::{Deserialize, Serialize};

/// Configuration for the `calculator` module (`modules.calculator`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Number of records returned by the history endpoint.
    #[serde(default = "default_history_limit")]
    pub history_limit: u64,
    /// Treat `0`, `""` and `false` as missing fields, like the legacy
    /// JavaScript backend did. Off by default.
    #[serde(default)]
    pub reject_zero_operands: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            reject_zero_operands: false,
        }
    }
}

fn default_history_limit() -> u64 {
    10
}
