//! RV64I Decode-Stage Core.
//!
//! This crate models the decode stage of an in-order RISC-V pipeline: it
//! classifies instruction words into immediate-encoding formats, derives the
//! control signals consumed by execute, memory and write-back, generates the
//! sign-extended immediate, and detects load-use data hazards.
//!
//! All decoding is a pure function of the instruction word and a read-only
//! instruction table, so a single table may be shared by any number of
//! concurrent decoders.
//!
//! # Modules
//!
//! * `common`: Shared types, bit-width helpers, and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: Register file, control decoder, hazard unit, and decode stage.
//! * `isa`: Instruction Set Architecture definitions and instruction table.
//! * `stats`: Decode statistics collection.

/// Shared types, bit-width helpers, and error types.
pub mod common;

/// Configuration system for register-file size, hazard policy and tracing.
///
/// Loads and parses TOML configuration files.
pub mod config;

/// Decode-stage core: register file, control decoder, hazard detection.
pub mod core;

/// Instruction Set Architecture definitions, instruction table and immediates.
pub mod isa;

/// Decode statistics collection and reporting.
pub mod stats;

pub use crate::core::pipeline::control::{decode, Decoded};
pub use crate::core::pipeline::hazards::hazard;
pub use crate::isa::format::InstFormat;
pub use crate::isa::immediate::generate_immediate;
pub use crate::isa::table::InstructionTable;
