//! Register index type and bit-width helpers.

/// Index into the general-purpose register file.
///
/// Values are in `[0, N)` for a register file of `N` registers and are
/// carried in `log2_ceil(N)` bits by the surrounding pipeline bundles.
pub type RegIndex = usize;

/// Returns `ceil(log2(n))`, the number of bits needed to encode `n` distinct values.
///
/// `log2_ceil(0)` and `log2_ceil(1)` are both 0.
pub fn log2_ceil(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
