//! Decode-stage core.
//!
//! Groups the architectural register file model and the pipeline pieces
//! evaluated in the decode stage: control-signal derivation, load-use
//! hazard detection, latches and the decode stage itself.

/// Architectural state (general-purpose register file).
pub mod arch;

/// Control signals, decoder, hazard detection, latches and stages.
pub mod pipeline;
