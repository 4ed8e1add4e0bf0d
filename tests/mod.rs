//! Test module organization.
//!
//! This module organizes all integration tests for the decode-stage core.





/// Instruction field extraction, format tag and table tests.
mod isa_tests;

/// Decode stage and register file tests.
mod stage_tests;
