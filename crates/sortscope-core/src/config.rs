//! Evaluation configuration
//!
//! Defaults reproduce a plain single-shot measurement. Settings can be loaded
//! from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `SORTSCOPE_WARMUP_RUNS` | `warmup_runs` | `0` |
//! | `SORTSCOPE_VERIFY_ORDER` | `verify_order` | `true` |

use std::env;

use serde::{Deserialize, Serialize};

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Untimed runs per algorithm before the timed one, each on its own copy
    pub warmup_runs: u32,
    /// Check every sorted copy is non-decreasing once its timer has stopped
    pub verify_order: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warmup_runs: 0,
            verify_order: true,
        }
    }
}

impl Config {
    pub fn new() -> Self { Self::default() }
    pub fn with_warmup(mut self, runs: u32) -> Self { self.warmup_runs = runs; self }
    pub fn with_verify_order(mut self, enabled: bool) -> Self { self.verify_order = enabled; self }

    /// Load from environment, falling back to defaults for unset or malformed values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            warmup_runs: lookup("SORTSCOPE_WARMUP_RUNS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.warmup_runs),
            verify_order: lookup("SORTSCOPE_VERIFY_ORDER")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(defaults.verify_order),
        }
    }
}
