//! Memory Access Types.
//!
//! Classifies the memory-side effect of a decoded instruction from its
//! memory-control signals. Used by the statistics collector and by callers
//! that only care whether a bundle touches memory.

use crate::core::pipeline::signals::MemCtrl;

/// Type of memory access requested by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// No memory access.
    None,

    /// Data read access.
    ///
    /// Produced by loads; these are the instructions the load-use hazard
    /// detector watches in the execute stage.
    Read,

    /// Data write access.
    ///
    /// Produced by stores.
    Write,
}

impl AccessType {
    /// Derives the access type from memory-control signals.
    ///
    /// A bundle with both `mem_read` and `mem_write` set cannot come out of
    /// the instruction table; reads take precedence if one is built by hand.
    pub fn from_mem_ctrl(mem: &MemCtrl) -> Self {
        if mem.mem_read {
            AccessType::Read
        } else if mem.mem_write {
            AccessType::Write
        } else {
            AccessType::None
        }
    }
}
