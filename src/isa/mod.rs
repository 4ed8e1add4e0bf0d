//! Instruction Set Architecture Definitions.
//!
//! Contains the field accessors, opcode and function-code constants, the
//! format tag, the static instruction table and the immediate generator for
//! the supported RV64I subset.

/// Function code 3 (bits 14-12) values.
pub mod funct3;

/// Function code 7 (bits 31-25) values.
pub mod funct7;

/// Immediate-encoding format tag.
pub mod format;

/// Sign-extended immediate generation.
pub mod immediate;

/// Instruction word bit-field extraction.
pub mod instruction;

/// Major opcodes (bits 6-0).
pub mod opcodes;

/// Static instruction table.
pub mod table;

pub use format::InstFormat;
pub use immediate::generate_immediate;
pub use instruction::InstructionBits;
pub use table::{InstructionSpec, InstructionTable, INSTRUCTIONS};
