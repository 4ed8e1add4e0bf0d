//! Decode statistics collection and reporting.
//!
//! Tracks how many words were decoded, how many matched no table entry, the
//! mix of formats and memory accesses, and load-use stalls.

use serde::Serialize;

use crate::common::data::AccessType;
use crate::core::pipeline::control::Decoded;
use crate::isa::format::InstFormat;

/// Decode-stage statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    pub decoded: u64,
    pub unmatched: u64,

    pub format_r: u64,
    pub format_i: u64,
    pub format_s: u64,
    pub format_b: u64,
    pub format_u: u64,
    pub format_j: u64,

    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,

    pub stalls_load_use: u64,
}

impl DecodeStats {
    /// Accounts for one decoded word.
    pub fn record_decode(&mut self, d: &Decoded) {
        self.decoded += 1;
        if !d.is_recognized() {
            self.unmatched += 1;
            return;
        }

        match d.format() {
            InstFormat::R => self.format_r += 1,
            InstFormat::I => self.format_i += 1,
            InstFormat::S => self.format_s += 1,
            InstFormat::B => self.format_b += 1,
            InstFormat::U => self.format_u += 1,
            InstFormat::J => self.format_j += 1,
        }

        match AccessType::from_mem_ctrl(&d.ctrl.mem) {
            AccessType::Read => self.inst_load += 1,
            AccessType::Write => self.inst_store += 1,
            AccessType::None => {}
        }
        if d.ctrl.mem.branch {
            self.inst_branch += 1;
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("DECODE STATISTICS");
        println!("==========================================================");
        println!("decoded             {:>12}", self.decoded);
        println!("unmatched (nop)     {:>12}", self.unmatched);
        println!("----------------------------------------------------------");
        println!(
            "format mix          R {} / I {} / S {} / B {} / U {} / J {}",
            self.format_r, self.format_i, self.format_s, self.format_b, self.format_u, self.format_j
        );
        println!("loads               {:>12}", self.inst_load);
        println!("stores              {:>12}", self.inst_store);
        println!("branches/jumps      {:>12}", self.inst_branch);
        println!("----------------------------------------------------------");
        println!("load-use stalls     {:>12}", self.stalls_load_use);
        println!("==========================================================");
    }
}
