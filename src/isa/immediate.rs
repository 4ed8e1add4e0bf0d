//! Immediate Generation.
//!
//! Reassembles the immediate scattered across an instruction word according
//! to its format and sign-extends it to 64 bits. Every layout places
//! instruction bit 31 at the top of the 32-bit intermediate, so the final
//! widening replicates instruction bit 31 into the upper half.

use super::format::InstFormat;
use super::instruction::InstructionBits;

/// Replicates bit 31 of `inst` into the low `n` bits of the result.
#[inline(always)]
fn fill_sign(inst: u32, n: u32) -> u32 {
    if inst.bit(31) == 1 {
        ((1u64 << n) - 1) as u32
    } else {
        0
    }
}

/// Assembles the 32-bit immediate for `format`, before widening.
///
/// Each arm concatenates fields most-significant first; the shift amounts are
/// the running widths of the fields to their right.
fn assemble(inst: u32, format: InstFormat) -> u32 {
    match format {
        InstFormat::R => 0,
        // {sign x21, [30:25], [24:21], [20]}
        InstFormat::I => {
            (fill_sign(inst, 21) << 11)
                | (inst.bits(30, 25) << 5)
                | (inst.bits(24, 21) << 1)
                | inst.bit(20)
        }
        // {sign x21, [30:25], [11:8], [7]}
        InstFormat::S => {
            (fill_sign(inst, 21) << 11)
                | (inst.bits(30, 25) << 5)
                | (inst.bits(11, 8) << 1)
                | inst.bit(7)
        }
        // {sign x20, [7], [30:25], [11:8], 0}
        InstFormat::B => {
            (fill_sign(inst, 20) << 12)
                | (inst.bit(7) << 11)
                | (inst.bits(30, 25) << 5)
                | (inst.bits(11, 8) << 1)
        }
        // {[31], [30:20], [19:12], 12 zeros}
        InstFormat::U => {
            (inst.bit(31) << 31) | (inst.bits(30, 20) << 20) | (inst.bits(19, 12) << 12)
        }
        // {sign x12, [19:12], [20], [30:25], [24:21], 0}
        InstFormat::J => {
            (fill_sign(inst, 12) << 20)
                | (inst.bits(19, 12) << 12)
                | (inst.bit(20) << 11)
                | (inst.bits(30, 25) << 5)
                | (inst.bits(24, 21) << 1)
        }
    }
}

/// Generates the 64-bit sign-extended immediate of `inst` under `format`.
///
/// Returns 0 for `InstFormat::R`, which is also the tag of unmatched encodings.
///
/// # Arguments
///
/// * `inst` - Raw 32-bit instruction word
/// * `format` - Format tag produced by the control decoder
pub fn generate_immediate(inst: u32, format: InstFormat) -> i64 {
    if !format.has_immediate() {
        return 0;
    }

    let low = assemble(inst, format) as u64;
    let high = if inst.bit(31) == 1 {
        0xFFFF_FFFF_0000_0000u64
    } else {
        0
    };

    (high | low) as i64
}
