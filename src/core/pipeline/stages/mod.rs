//! Pipeline stage implementations.
//!
//! Only the decode stage is modelled: it reads the register file, derives
//! control signals and the immediate, and raises load-use stalls. Fetch,
//! execute, memory and write-back belong to the surrounding pipeline.

/// Instruction decode stage implementation.
pub mod decode;

pub use decode::{DecodeOutcome, DecodeStage};
