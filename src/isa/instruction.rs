//! Instruction word bit-field extraction.
//!
//! Field positions are fixed; which fields are meaningful depends on the
//! instruction's format, so every accessor works on every word.

/// Bit-field accessors for a raw 32-bit instruction word.
pub trait InstructionBits {
    /// Major opcode, bits 6-0.
    fn opcode(&self) -> u32;
    /// Destination register index, bits 11-7.
    fn rd(&self) -> usize;
    /// Function code 3, bits 14-12.
    fn funct3(&self) -> u32;
    /// First source register index, bits 19-15.
    fn rs1(&self) -> usize;
    /// Second source register index, bits 24-20.
    fn rs2(&self) -> usize;
    /// Function code 7, bits 31-25.
    fn funct7(&self) -> u32;
    /// Single bit `n` (0 = LSB), as 0 or 1.
    fn bit(&self, n: u32) -> u32;
    /// Inclusive field `hi..=lo`, shifted down to bit 0.
    fn bits(&self, hi: u32, lo: u32) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & 0x7f
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & 0x1f) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & 0x7
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & 0x1f) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & 0x1f) as usize
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & 0x7f
    }

    #[inline(always)]
    fn bit(&self, n: u32) -> u32 {
        (self >> n) & 1
    }

    #[inline(always)]
    fn bits(&self, hi: u32, lo: u32) -> u32 {
        let width = hi - lo + 1;
        if width >= 32 {
            self >> lo
        } else {
            (self >> lo) & ((1u32 << width) - 1)
        }
    }
}
