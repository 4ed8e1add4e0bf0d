use log::info;

use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::control;
use crate::core::pipeline::hazards::HazardUnit;
use crate::core::pipeline::latches::{IdEx, IdExEntry, IfId, IfIdEntry, RegWrite};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::InstructionBits;
use crate::isa::table::InstructionTable;
use crate::stats::DecodeStats;

/// What the decode stage did in one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The IF/ID entries were decoded into ID/EX; carries how many.
    Advanced(usize),
    /// A load-use hazard was detected; a bubble was sent to execute and the
    /// IF/ID entries were held.
    Stalled,
    /// IF/ID was empty.
    Idle,
}

/// Decode stage: register read, control derivation, immediate and stall check.
#[derive(Clone, Debug)]
pub struct DecodeStage {
    table: InstructionTable,
    hazards: HazardUnit,
    trace: bool,
    pub stats: DecodeStats,
}

impl DecodeStage {
    pub fn new(table: InstructionTable, hazards: HazardUnit, trace: bool) -> Self {
        Self {
            table,
            hazards,
            trace: trace || cfg!(feature = "always-trace"),
            stats: DecodeStats::default(),
        }
    }

    /// Builds a stage over the built-in table with the configured policies.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            InstructionTable::rv64i(),
            HazardUnit::new(config.pipeline.hazard_ignores_x0),
            config.general.trace_decode,
        )
    }

    pub fn table(&self) -> &InstructionTable {
        &self.table
    }

    pub fn hazard_unit(&self) -> &HazardUnit {
        &self.hazards
    }

    /// Decodes a single fetched instruction.
    ///
    /// The write port is applied before the source registers are read, so a
    /// value written back in the same cycle is visible to this instruction.
    ///
    /// # Arguments
    ///
    /// * `regs` - Register file to read rs1/rs2 from
    /// * `reg_write` - Write-back port for this cycle
    /// * `entry` - The fetched instruction
    pub fn decode_one<R: RegisterFile>(
        &mut self,
        regs: &mut R,
        reg_write: RegWrite,
        entry: &IfIdEntry,
    ) -> IdExEntry {
        if reg_write.en {
            regs.write(reg_write.addr, reg_write.data);
        }
        self.decode_entry(regs, entry)
    }

    fn decode_entry<R: RegisterFile>(&mut self, regs: &R, entry: &IfIdEntry) -> IdExEntry {
        let inst = entry.inst;
        let d = control::decode(&self.table, inst);
        self.stats.record_decode(&d);

        let rs1 = inst.rs1();
        let rs2 = inst.rs2();
        let rd = inst.rd();
        let rs1_data = regs.read(rs1);
        let rs2_data = regs.read(rs2);

        if self.trace {
            info!(
                "ID  pc={:#x} inst={:#010x} {} rs1=x{} v={:#x} rs2=x{} v={:#x} rd=x{} imm={:#x}",
                entry.pc,
                inst,
                d.mnemonic.unwrap_or("<nop>"),
                rs1,
                rs1_data,
                rs2,
                rs2_data,
                rd,
                d.imm
            );
        }

        IdExEntry {
            pc: entry.pc,
            inst,
            rs1,
            rs2,
            rd,
            rs1_data,
            rs2_data,
            imm: d.imm,
            ctrl: d.ctrl,
            mnemonic: d.mnemonic,
        }
    }

    /// Executes one cycle of the decode stage.
    ///
    /// The write port is always applied. If the instructions now in execute
    /// (`id_ex`, as latched last cycle) raise a load-use hazard against
    /// `if_id`, `id_ex` is flushed to a bubble and `if_id` is left untouched
    /// for the next cycle. Otherwise every IF/ID entry is decoded into a new
    /// `id_ex` and IF/ID is consumed.
    pub fn tick<R: RegisterFile>(
        &mut self,
        regs: &mut R,
        reg_write: RegWrite,
        if_id: &mut IfId,
        id_ex: &mut IdEx,
    ) -> DecodeOutcome {
        if reg_write.en {
            regs.write(reg_write.addr, reg_write.data);
        }

        if if_id.is_empty() {
            id_ex.flush();
            return DecodeOutcome::Idle;
        }

        if self.hazards.need_stall_load_use(id_ex, if_id) {
            self.stats.stalls_load_use += 1;
            id_ex.flush();
            return DecodeOutcome::Stalled;
        }

        let mut decoded = Vec::with_capacity(if_id.entries.len());
        for entry in &if_id.entries {
            decoded.push(self.decode_entry(regs, entry));
        }
        let count = decoded.len();

        *id_ex = IdEx { entries: decoded };
        if_id.flush();

        DecodeOutcome::Advanced(count)
    }
}

impl Default for DecodeStage {
    fn default() -> Self {
        Self::new(InstructionTable::rv64i(), HazardUnit::default(), false)
    }
}
