//! RISC-V Function Code 3 (funct3) Definitions.
//!
//! The `funct3` field (bits 14-12) distinguishes instructions sharing a major
//! opcode. Several mnemonics reuse the same value under different opcodes.

// Register and immediate arithmetic.
pub const ADD_SUB: u32 = 0b000;
pub const SLL: u32 = 0b001;
pub const XOR: u32 = 0b100;
pub const SRL_SRA: u32 = 0b101;
pub const OR: u32 = 0b110;
pub const AND: u32 = 0b111;

// Loads.
pub const LB: u32 = 0b000;
pub const LH: u32 = 0b001;
pub const LW: u32 = 0b010;
pub const LD: u32 = 0b011;
pub const LBU: u32 = 0b100;
pub const LHU: u32 = 0b101;
pub const LWU: u32 = 0b110;

// Stores.
pub const SB: u32 = 0b000;
pub const SH: u32 = 0b001;
pub const SW: u32 = 0b010;
pub const SD: u32 = 0b011;

// Branches.
pub const BEQ: u32 = 0b000;
pub const BNE: u32 = 0b001;
pub const BLT: u32 = 0b100;
pub const BGE: u32 = 0b101;
pub const BLTU: u32 = 0b110;
pub const BGEU: u32 = 0b111;

/// JALR only defines funct3 = 0.
pub const JALR: u32 = 0b000;
