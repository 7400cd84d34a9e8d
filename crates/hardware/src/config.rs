//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline memory capacities and run limits.
//! 2. **Structures:** Hierarchical config for general settings and memory sizing.
//! 3. **Enums:** The fault policy applied when a faulted instruction reaches Execute.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with
//! `Config::default()`. Every field may be omitted.

use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle limit for `Simulator::run_until`.
    pub const MAX_CYCLES: u64 = 10_000;

    /// Instruction memory capacity in 32-bit words.
    pub const IMEM_WORDS: usize = 1024;

    /// Data memory capacity in 32-bit words.
    pub const DMEM_WORDS: usize = 1024;
}

/// What the core does when a faulted instruction reaches Execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FaultPolicy {
    /// Commit nothing that cycle and stop; every later tick reports the same fault.
    #[default]
    Halt,
    /// Replace the instruction with a bubble, log it and keep going.
    Nop,
}

/// Top-level simulator configuration.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::{Config, FaultPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "fault_policy": "Nop" },
///     "memory": { "dmem_words": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.fault_policy, FaultPolicy::Nop);
/// assert_eq!(config.general.max_cycles, 10_000);
/// assert_eq!(config.memory.dmem_words, 64);
/// assert_eq!(config.memory.imem_words, 1024);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory sizing
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or has a field of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or
    /// [`SimError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-stage `debug!` trace line every cycle
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle limit for runs that wait on a condition
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Behaviour on illegal instructions
    #[serde(default)]
    pub fault_policy: FaultPolicy,
}

impl GeneralConfig {
    /// Returns the default cycle limit.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
            fault_policy: FaultPolicy::Halt,
        }
    }
}

/// Instruction and data memory sizing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory capacity in words
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory capacity in words
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory capacity.
    fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    /// Returns the default data memory capacity.
    fn default_dmem_words() -> usize {
        defaults::DMEM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: defaults::IMEM_WORDS,
            dmem_words: defaults::DMEM_WORDS,
        }
    }
}
