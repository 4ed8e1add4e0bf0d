//! Error types.
//!
//! Decoding and hazard detection are infallible. The only fallible surface
//! is building a core from configuration: parsing the TOML file and sizing
//! the register file.

use std::fmt;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for the expected schema.
    Parse(String),
    /// Register count is zero.
    EmptyRegisterFile,
    /// Register count exceeds what a 5-bit register field can address.
    RegisterCountTooLarge(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::EmptyRegisterFile => write!(f, "Register count must be non-zero"),
            ConfigError::RegisterCountTooLarge(n) => {
                write!(f, "Register count {} exceeds the 32 addressable registers", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
