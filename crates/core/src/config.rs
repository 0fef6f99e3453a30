//! Machine configuration.
//!
//! This module parameterizes machine construction for embedders and the CLI.
//! It provides:
//! 1. **Defaults:** Baseline constants for the stack window and run budget.
//! 2. **Deserialization:** JSON configuration via serde, with every field
//!    optional and falling back to the defaults.
//!
//! Use `Config::default()` for the CLI path or [`Config::from_json`] when
//! embedding.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Stack window capacity in words.
    pub const STACK_CAPACITY: usize = 256;

    /// Step budget for one bounded run.
    ///
    /// Large enough for real programs while still bounding runaway loops;
    /// callers that want an unbounded-feeling run simply call `run` again.
    pub const STEP_BUDGET: u64 = 1_000_000;
}

/// Machine construction and run parameters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stack window capacity in words.
    pub stack_capacity: usize,
    /// Maximum number of instructions per bounded run.
    pub step_budget: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_capacity: defaults::STACK_CAPACITY,
            step_budget: defaults::STEP_BUDGET,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serde error for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
