//! Common types shared by the decoder, hazard unit and decode stage.
//!
//! This module provides the register index type, bit-width helpers used to
//! size external bundle fields, and the crate's error types.

/// Memory access classification used by statistics and control queries.
pub mod data;

/// Error types for configuration and register file construction.
pub mod error;

/// Register index type and bit-width helpers.
pub mod reg;

pub use data::AccessType;
pub use error::ConfigError;
pub use reg::{log2_ceil, RegIndex};
