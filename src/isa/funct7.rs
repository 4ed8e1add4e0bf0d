//! RISC-V Function Code 7 (funct7) Definitions.

/// Default funct7 for ADD, SLL, SRL and the immediate shifts.
pub const DEFAULT: u32 = 0b0000000;

/// Alternate funct7 selecting SUB and SRA/SRAI.
pub const SUB_SRA: u32 = 0b0100000;
