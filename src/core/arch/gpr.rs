//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file with a
//! configurable register count. It enforces the architectural invariant that
//! register x0 is always hardwired to zero.

use crate::common::error::ConfigError;
use crate::common::reg::{log2_ceil, RegIndex};

/// Read/write ports the decode stage needs from a register file.
pub trait RegisterFile {
    /// Reads register `idx`.
    fn read(&self, idx: RegIndex) -> u64;

    /// Writes `val` to register `idx`.
    fn write(&mut self, idx: RegIndex, val: u64);
}

/// General-Purpose Register file.
///
/// Register x0 is hardwired to zero and cannot be modified.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: Vec<u64>,
}

impl Gpr {
    /// Largest register count a 5-bit register field can address.
    pub const MAX_REGS: usize = 32;

    /// Creates a register file with `count` registers, all zero.
    ///
    /// # Errors
    ///
    /// Fails if `count` is zero or above [`Gpr::MAX_REGS`]. Counts that are
    /// not a power of two are allowed; indices still take `ceil(log2(count))` bits.
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyRegisterFile);
        }
        if count > Self::MAX_REGS {
            return Err(ConfigError::RegisterCountTooLarge(count));
        }
        Ok(Self {
            regs: vec![0; count],
        })
    }

    /// Number of registers.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Bits needed to address a register, `ceil(log2(len))`.
    pub fn index_width(&self) -> u32 {
        log2_ceil(self.regs.len())
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self {
            regs: vec![0; Self::MAX_REGS],
        }
    }
}

impl RegisterFile for Gpr {
    /// Register x0 always reads 0. Indices past the end of a reduced
    /// register file also read 0.
    fn read(&self, idx: RegIndex) -> u64 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes to x0, and past the end of a reduced register file, are ignored.
    fn write(&mut self, idx: RegIndex, val: u64) {
        if idx == 0 {
            return;
        }
        if let Some(reg) = self.regs.get_mut(idx) {
            *reg = val;
        }
    }
}
