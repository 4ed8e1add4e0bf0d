//! Table-driven control decoder.
//!
//! Scans the instruction table in order and, on every entry whose opcode and
//! function codes match, replaces the whole control bundle with that entry's
//! values. The scan does not stop at the first hit: if wildcard entries ever
//! overlap, the last matching entry in table order wins.

use log::{debug, trace};
use serde::Serialize;

use crate::isa::format::InstFormat;
use crate::isa::immediate::generate_immediate;
use crate::isa::table::InstructionTable;

use super::signals::ControlSignals;

/// Result of decoding one instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Raw instruction word, kept for downstream fault reporting.
    pub inst: u32,
    /// Control signals for execute, memory and write-back.
    pub ctrl: ControlSignals,
    /// Sign-extended immediate.
    pub imm: i64,
    /// Mnemonic of the winning table entry, `None` if nothing matched.
    pub mnemonic: Option<&'static str>,
}

impl Decoded {
    /// Immediate-encoding format tag.
    pub fn format(&self) -> InstFormat {
        self.ctrl.format
    }

    /// Whether any table entry matched.
    pub fn is_recognized(&self) -> bool {
        self.mnemonic.is_some()
    }
}

/// Derives the format tag and control bundle for `inst`.
///
/// Unmatched encodings yield the default bundle (format R, no memory
/// access, ALU op class 0). No illegal-instruction fault is raised.
///
/// # Arguments
///
/// * `table` - Ordered instruction table to match against
/// * `inst` - Raw 32-bit instruction word
///
/// # Returns
///
/// The format tag and control signals, plus the matching mnemonic if any.
pub fn control(table: &InstructionTable, inst: u32) -> (ControlSignals, Option<&'static str>) {
    table
        .entries()
        .iter()
        .fold((ControlSignals::default(), None), |acc, (name, spec)| {
            if spec.matches(inst) {
                (spec.control(), Some(*name))
            } else {
                acc
            }
        })
}

/// Decodes `inst` into control signals and its immediate.
///
/// # Arguments
///
/// * `table` - Ordered instruction table to match against
/// * `inst` - Raw 32-bit instruction word
pub fn decode(table: &InstructionTable, inst: u32) -> Decoded {
    let (ctrl, mnemonic) = control(table, inst);
    let imm = generate_immediate(inst, ctrl.format);

    match mnemonic {
        Some(name) => trace!(
            "ID  inst={:#010x} {} fmt={:?} alu_src={:?} alu_op={:#04b} imm={:#x}",
            inst,
            name,
            ctrl.format,
            ctrl.ex.alu_src,
            ctrl.ex.alu_op,
            imm
        ),
        None => debug!("ID  inst={:#010x} matched no table entry, decoding as nop", inst),
    }

    Decoded {
        inst,
        ctrl,
        imm,
        mnemonic,
    }
}
