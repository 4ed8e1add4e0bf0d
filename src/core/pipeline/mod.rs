//! Decode-stage pipeline logic.
//!
//! This module contains the control signals produced by decode, the
//! table-driven control decoder, load-use hazard detection, the latches on
//! either side of the decode stage, and the decode stage itself.

/// Table-driven control-signal decoder.
pub mod control;

/// Load-use hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX) and the register write port.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
