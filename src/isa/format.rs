//! Immediate-encoding format tag.
//!
//! The format tag classifies how an instruction word scatters its immediate
//! bits. It is produced by the control decoder and consumed by the immediate
//! generator; downstream stages carry it in a `format_tag_width()`-bit field.

use serde::Serialize;

use crate::common::reg::log2_ceil;

/// Instruction format (R, I, S, B, U, J).
///
/// The default is `R`, which is also the tag reported for encodings that
/// match no table entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum InstFormat {
    /// Register-register; carries no immediate.
    #[default]
    R,
    /// Register-immediate, loads and JALR.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediate.
    U,
    /// Unconditional jump.
    J,
}

impl InstFormat {
    /// Number of distinct formats.
    pub const COUNT: usize = 6;

    /// All formats in encoding order.
    pub const ALL: [InstFormat; Self::COUNT] = [
        InstFormat::R,
        InstFormat::I,
        InstFormat::S,
        InstFormat::B,
        InstFormat::U,
        InstFormat::J,
    ];

    /// Numeric tag value as carried in pipeline bundles.
    pub fn encoding(self) -> u8 {
        match self {
            InstFormat::R => 0,
            InstFormat::I => 1,
            InstFormat::S => 2,
            InstFormat::B => 3,
            InstFormat::U => 4,
            InstFormat::J => 5,
        }
    }

    /// Inverse of [`InstFormat::encoding`]; `None` for unused tag values.
    pub fn from_encoding(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Bits needed to carry the tag, `ceil(log2(COUNT))`.
    pub fn tag_width() -> u32 {
        log2_ceil(Self::COUNT)
    }

    /// Whether this format encodes an immediate at all.
    pub fn has_immediate(self) -> bool {
        self != InstFormat::R
    }
}
