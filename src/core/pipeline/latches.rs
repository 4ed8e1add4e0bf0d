//! Pipeline latch structures around the decode stage.
//!
//! Latches hold instruction state as it crosses a stage boundary. Each latch
//! carries a vector of entries so that multi-issue front ends can decode
//! several instructions per cycle against the same table.

use serde::Serialize;

use crate::common::reg::RegIndex;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains register indices, the values read for them, the sign-extended
/// immediate and the control signals for the later stages.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index (rs1).
    pub rs1: RegIndex,
    /// Second source register index (rs2).
    pub rs2: RegIndex,
    /// Destination register index (rd).
    pub rd: RegIndex,
    /// Value read from rs1.
    pub rs1_data: u64,
    /// Value read from rs2.
    pub rs2_data: u64,
    /// Sign-extended immediate value.
    pub imm: i64,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Mnemonic of the matching table entry, if any.
    pub mnemonic: Option<&'static str>,
}

/// Register-file write port driven by the write-back stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register index.
    pub addr: RegIndex,
    /// Write enable.
    pub en: bool,
    /// Value to write.
    pub data: u64,
}

impl RegWrite {
    /// An enabled write of `data` to `addr`.
    pub fn new(addr: RegIndex, data: u64) -> Self {
        Self {
            addr,
            en: true,
            data,
        }
    }
}

/// IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Default, Debug)]
pub struct IfId {
    /// Fetched instruction entries.
    pub entries: Vec<IfIdEntry>,
}

/// ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Default, Debug)]
pub struct IdEx {
    /// Decoded instruction entries.
    pub entries: Vec<IdExEntry>,
}

impl PipelineLatch for IfId {
    fn flush(&mut self) {
        self.entries.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PipelineLatch for IdEx {
    fn flush(&mut self) {
        self.entries.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
