//! RISC-V architectural state.
//!
//! Only the general-purpose register file is modelled; it sits behind the
//! [`RegisterFile`] trait so the decode stage can be driven by any backing
//! store the surrounding pipeline provides.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::{Gpr, RegisterFile};
