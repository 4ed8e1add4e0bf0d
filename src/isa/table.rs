//! Static Instruction Table.
//!
//! One descriptor per supported mnemonic, in a fixed order. The control
//! decoder scans the table front to back and a later hit replaces an
//! earlier one, so the order here is part of the decoding rule.

use super::format::InstFormat;
use super::instruction::InstructionBits;
use super::{funct3, funct7, opcodes};
use crate::core::pipeline::signals::{AluSrc, ControlSignals, ExCtrl, MemCtrl, WbCtrl};

/// Decoding descriptor for one mnemonic.
///
/// `funct3`/`funct7` of `None` match any value in that field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionSpec {
    /// Required major opcode.
    pub opcode: u32,
    /// Required funct3, or wildcard.
    pub funct3: Option<u32>,
    /// Required funct7, or wildcard.
    pub funct7: Option<u32>,
    /// Immediate-encoding format.
    pub format: InstFormat,
    /// Second ALU operand source.
    pub alu_src: AluSrc,
    /// 2-bit ALU operation class.
    pub alu_op: u8,
    /// Instruction may redirect control flow.
    pub branch: bool,
    /// Instruction writes memory.
    pub mem_write: bool,
    /// Instruction reads memory.
    pub mem_read: bool,
    /// Write-back selects the memory result over the ALU result.
    pub mem_to_reg: bool,
}

impl InstructionSpec {
    /// Returns true if `inst` carries this entry's opcode and function codes.
    #[inline]
    pub fn matches(&self, inst: u32) -> bool {
        inst.opcode() == self.opcode
            && self.funct3.map_or(true, |f| inst.funct3() == f)
            && self.funct7.map_or(true, |f| inst.funct7() == f)
    }

    /// Control signals driven when this entry matches.
    pub fn control(&self) -> ControlSignals {
        ControlSignals {
            format: self.format,
            ex: ExCtrl {
                alu_src: self.alu_src,
                alu_op: self.alu_op,
            },
            mem: MemCtrl {
                branch: self.branch,
                mem_write: self.mem_write,
                mem_read: self.mem_read,
            },
            wb: WbCtrl {
                mem_to_reg: self.mem_to_reg,
            },
        }
    }
}

const fn r_type(funct3: u32, funct7: u32) -> InstructionSpec {
    InstructionSpec {
        opcode: opcodes::OP_REG,
        funct3: Some(funct3),
        funct7: Some(funct7),
        format: InstFormat::R,
        alu_src: AluSrc::Reg2,
        alu_op: 0b10,
        branch: false,
        mem_write: false,
        mem_read: false,
        mem_to_reg: false,
    }
}

const fn load(funct3: u32) -> InstructionSpec {
    InstructionSpec {
        opcode: opcodes::OP_LOAD,
        funct3: Some(funct3),
        funct7: None,
        format: InstFormat::I,
        alu_src: AluSrc::None,
        alu_op: 0b00,
        branch: false,
        mem_write: false,
        mem_read: true,
        mem_to_reg: true,
    }
}

const fn op_imm(funct3: u32, funct7: Option<u32>) -> InstructionSpec {
    InstructionSpec {
        opcode: opcodes::OP_IMM,
        funct3: Some(funct3),
        funct7,
        format: InstFormat::I,
        alu_src: AluSrc::Imm,
        alu_op: 0b00,
        branch: false,
        mem_write: false,
        mem_read: false,
        mem_to_reg: false,
    }
}

const fn store(funct3: u32) -> InstructionSpec {
    InstructionSpec {
        opcode: opcodes::OP_STORE,
        funct3: Some(funct3),
        funct7: None,
        format: InstFormat::S,
        alu_src: AluSrc::None,
        alu_op: 0b00,
        branch: false,
        mem_write: true,
        mem_read: false,
        mem_to_reg: false,
    }
}

const fn branch(funct3: u32) -> InstructionSpec {
    InstructionSpec {
        opcode: opcodes::OP_BRANCH,
        funct3: Some(funct3),
        funct7: None,
        format: InstFormat::B,
        alu_src: AluSrc::None,
        alu_op: 0b01,
        branch: true,
        mem_write: false,
        mem_read: false,
        mem_to_reg: false,
    }
}

/// The supported RV64I subset, in decode priority order.
pub static INSTRUCTIONS: &[(&str, InstructionSpec)] = &[
    ("add", r_type(funct3::ADD_SUB, funct7::DEFAULT)),
    ("sub", r_type(funct3::ADD_SUB, funct7::SUB_SRA)),
    ("sll", r_type(funct3::SLL, funct7::DEFAULT)),
    ("xor", r_type(funct3::XOR, funct7::DEFAULT)),
    ("srl", r_type(funct3::SRL_SRA, funct7::DEFAULT)),
    ("or", r_type(funct3::OR, funct7::DEFAULT)),
    ("and", r_type(funct3::AND, funct7::DEFAULT)),
    ("lb", load(funct3::LB)),
    ("lh", load(funct3::LH)),
    ("lw", load(funct3::LW)),
    ("ld", load(funct3::LD)),
    ("lbu", load(funct3::LBU)),
    ("lhu", load(funct3::LHU)),
    ("lwu", load(funct3::LWU)),
    ("addi", op_imm(funct3::ADD_SUB, None)),
    ("slli", op_imm(funct3::SLL, Some(funct7::DEFAULT))),
    ("xori", op_imm(funct3::XOR, None)),
    ("srli", op_imm(funct3::SRL_SRA, Some(funct7::DEFAULT))),
    ("srai", op_imm(funct3::SRL_SRA, Some(funct7::SUB_SRA))),
    ("ori", op_imm(funct3::OR, None)),
    ("andi", op_imm(funct3::AND, None)),
    (
        "jalr",
        InstructionSpec {
            opcode: opcodes::OP_JALR,
            funct3: Some(funct3::JALR),
            funct7: None,
            format: InstFormat::I,
            alu_src: AluSrc::None,
            alu_op: 0b00,
            branch: false,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
        },
    ),
    ("sb", store(funct3::SB)),
    ("sh", store(funct3::SH)),
    ("sw", store(funct3::SW)),
    ("sd", store(funct3::SD)),
    ("beq", branch(funct3::BEQ)),
    ("bne", branch(funct3::BNE)),
    ("blt", branch(funct3::BLT)),
    ("bge", branch(funct3::BGE)),
    ("bltu", branch(funct3::BLTU)),
    ("bgeu", branch(funct3::BGEU)),
    (
        "lui",
        InstructionSpec {
            opcode: opcodes::OP_LUI,
            funct3: None,
            funct7: None,
            format: InstFormat::U,
            alu_src: AluSrc::None,
            alu_op: 0b00,
            branch: false,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
        },
    ),
    (
        "jal",
        InstructionSpec {
            opcode: opcodes::OP_JAL,
            funct3: None,
            funct7: None,
            format: InstFormat::J,
            alu_src: AluSrc::None,
            alu_op: 0b00,
            branch: true,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
        },
    ),
];

/// Read-only handle on an ordered instruction table.
///
/// Cheap to copy; every decoder and decode stage holds one by value and all
/// of them share the same static entries.
#[derive(Clone, Copy, Debug)]
pub struct InstructionTable {
    entries: &'static [(&'static str, InstructionSpec)],
}

impl InstructionTable {
    /// Table for the built-in RV64I subset.
    pub fn rv64i() -> Self {
        Self::from_static(INSTRUCTIONS)
    }

    /// Wraps an arbitrary static table. Order is preserved as given.
    pub fn from_static(entries: &'static [(&'static str, InstructionSpec)]) -> Self {
        Self { entries }
    }

    /// Entries in decode priority order.
    pub fn entries(&self) -> &'static [(&'static str, InstructionSpec)] {
        self.entries
    }

    /// Finds the descriptor for `mnemonic`.
    pub fn lookup(&self, mnemonic: &str) -> Option<&'static InstructionSpec> {
        self.entries
            .iter()
            .find(|(name, _)| *name == mnemonic)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::rv64i()
    }
}
