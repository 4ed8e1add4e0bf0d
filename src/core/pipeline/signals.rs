//! Pipeline control signals.
//!
//! This module defines the control signals produced by decode and consumed by
//! later stages. They are grouped by consumer:
//! 1. **Execute:** ALU second-operand source and ALU operation class.
//! 2. **Memory:** branch, memory write and memory read enables.
//! 3. **Write-back:** result selection between ALU and memory.
//!
//! Every group defaults to all-zero, which is the bundle driven for encodings
//! the instruction table does not recognise.

use serde::Serialize;

use crate::isa::format::InstFormat;

/// Source for the second ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluSrc {
    /// No override; the execute stage uses its default operand.
    #[default]
    None,

    /// Use the rs2 register value.
    Reg2,

    /// Use the sign-extended immediate.
    Imm,
}

impl AluSrc {
    /// Numeric selector value as carried in pipeline bundles.
    pub fn encoding(self) -> u8 {
        match self {
            AluSrc::None => 0,
            AluSrc::Reg2 => 1,
            AluSrc::Imm => 2,
        }
    }
}

/// Execute-stage control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExCtrl {
    /// Source selection for the second ALU operand.
    pub alu_src: AluSrc,
    /// 2-bit ALU operation class (0b00 add, 0b01 branch compare, 0b10 funct-decoded).
    pub alu_op: u8,
}

/// Memory-stage control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemCtrl {
    /// Instruction may redirect control flow.
    pub branch: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
}

/// Write-back-stage control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WbCtrl {
    /// Write back the loaded value instead of the ALU result.
    pub mem_to_reg: bool,
}

/// Full control bundle derived from one instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// Immediate-encoding format tag.
    pub format: InstFormat,
    /// Execute-stage control group.
    pub ex: ExCtrl,
    /// Memory-stage control group.
    pub mem: MemCtrl,
    /// Write-back-stage control group.
    pub wb: WbCtrl,
}

impl ControlSignals {
    /// True for the inert bundle driven by unmatched encodings.
    pub fn is_nop(&self) -> bool {
        *self == ControlSignals::default()
    }
}
