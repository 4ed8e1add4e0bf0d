//! Load-Use Hazard Detection.
//!
//! A load-use hazard occurs when the instruction in the decode stage reads a
//! register that the load currently in the execute stage has not yet
//! written back. Detection only raises the stall request; bubbling and
//! forwarding are handled by the surrounding pipeline.

use log::debug;

use crate::common::reg::RegIndex;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::isa::instruction::InstructionBits;

/// Returns true iff a load in execute targets a register read in decode.
///
/// Register x0 is not special-cased: a load into x0 followed by a read of x0
/// raises the flag.
///
/// # Arguments
///
/// * `ex_mem_read` - Memory-read enable of the instruction in execute
/// * `ex_rd` - Destination register of the instruction in execute
/// * `id_rs1` - First source register of the instruction in decode
/// * `id_rs2` - Second source register of the instruction in decode
#[inline]
pub fn hazard(ex_mem_read: bool, ex_rd: RegIndex, id_rs1: RegIndex, id_rs2: RegIndex) -> bool {
    ex_mem_read && (ex_rd == id_rs1 || ex_rd == id_rs2)
}

/// Load-use hazard detector with a configurable x0 policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct HazardUnit {
    /// Suppress the flag when the load targets x0.
    pub ignore_zero_register: bool,
}

impl HazardUnit {
    pub fn new(ignore_zero_register: bool) -> Self {
        Self {
            ignore_zero_register,
        }
    }

    /// Evaluates [`hazard`] under this unit's x0 policy.
    pub fn data_hazard(
        &self,
        ex_mem_read: bool,
        ex_rd: RegIndex,
        id_rs1: RegIndex,
        id_rs2: RegIndex,
    ) -> bool {
        if self.ignore_zero_register && ex_rd == 0 {
            return false;
        }
        hazard(ex_mem_read, ex_rd, id_rs1, id_rs2)
    }

    /// Checks every execute-side entry against every decode-side entry.
    ///
    /// # Arguments
    ///
    /// * `id_ex` - The ID/EX latch holding instructions now in execute
    /// * `if_id` - The IF/ID latch holding instructions now in decode
    ///
    /// # Returns
    ///
    /// `true` if any pair requires a stall.
    pub fn need_stall_load_use(&self, id_ex: &IdEx, if_id: &IfId) -> bool {
        for ex_inst in &id_ex.entries {
            let ex_mem_read = ex_inst.ctrl.mem.mem_read;
            if !ex_mem_read {
                continue;
            }

            for id_inst in &if_id.entries {
                let inst = id_inst.inst;
                if self.data_hazard(ex_mem_read, ex_inst.rd, inst.rs1(), inst.rs2()) {
                    debug!(
                        "Load-use stall: ex pc={:#x} rd=x{} -> id pc={:#x} inst={:#010x}",
                        ex_inst.pc, ex_inst.rd, id_inst.pc, inst
                    );
                    return true;
                }
            }
        }
        false
    }
}

/// Checks the latches for a load-use hazard under the literal x0 policy.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    HazardUnit::default().need_stall_load_use(id_ex, if_id)
}
