//! Coordinate types and the base-2 radical inverse.
use num::{PrimInt, Unsigned};
use std::fmt;

/// An unsigned integer type usable for the net's lattice coordinates.
///
/// A generator over `T` supports resolutions up to `2^(T::BITS - 1)` points,
/// so that `n` itself is representable.
pub trait Coord: PrimInt + Unsigned + fmt::Debug {
    /// The width of the type in bits.
    const BITS: u32;

    /// The base-2 radical inverse (van der Corput) of `self` over the full
    /// width of the type, i.e., `self` with its bit order reversed.
    ///
    /// Read as a fixed-point fraction, the result is the mirror of `self`
    /// about the binary point.
    fn radical_inverse(self) -> Self;

    /// Convert to a table index. Truncates if `usize` is narrower than `Self`.
    fn as_index(self) -> usize;

    /// Widen to `u64` (for error reporting).
    fn widen(self) -> u64;
}

impl Coord for u32 {
    const BITS: u32 = 32;

    #[inline]
    fn radical_inverse(self) -> Self {
        let mut bits = self;
        bits = (bits << 16) | (bits >> 16);
        bits = ((bits & 0x00ff_00ff) << 8) | ((bits & 0xff00_ff00) >> 8);
        bits = ((bits & 0x0f0f_0f0f) << 4) | ((bits & 0xf0f0_f0f0) >> 4);
        bits = ((bits & 0x3333_3333) << 2) | ((bits & 0xcccc_cccc) >> 2);
        bits = ((bits & 0x5555_5555) << 1) | ((bits & 0xaaaa_aaaa) >> 1);
        bits
    }

    #[inline]
    fn as_index(self) -> usize {
        self as usize
    }

    #[inline]
    fn widen(self) -> u64 {
        u64::from(self)
    }
}

impl Coord for u64 {
    const BITS: u32 = 64;

    #[inline]
    fn radical_inverse(self) -> Self {
        let mut bits = self;
        bits = (bits << 32) | (bits >> 32);
        bits = ((bits & 0x0000_ffff_0000_ffff) << 16) | ((bits & 0xffff_0000_ffff_0000) >> 16);
        bits = ((bits & 0x00ff_00ff_00ff_00ff) << 8) | ((bits & 0xff00_ff00_ff00_ff00) >> 8);
        bits = ((bits & 0x0f0f_0f0f_0f0f_0f0f) << 4) | ((bits & 0xf0f0_f0f0_f0f0_f0f0) >> 4);
        bits = ((bits & 0x3333_3333_3333_3333) << 2) | ((bits & 0xcccc_cccc_cccc_cccc) >> 2);
        bits = ((bits & 0x5555_5555_5555_5555) << 1) | ((bits & 0xaaaa_aaaa_aaaa_aaaa) >> 1);
        bits
    }

    #[inline]
    fn as_index(self) -> usize {
        self as usize
    }

    #[inline]
    fn widen(self) -> u64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radical_inverse_sanity() {
        assert_eq!(0u32.radical_inverse(), 0);
        assert_eq!(1u32.radical_inverse(), 0x8000_0000);
        assert_eq!(2u32.radical_inverse(), 0x4000_0000);
        assert_eq!(3u32.radical_inverse(), 0xc000_0000);
        assert_eq!(0x8000_0000u32.radical_inverse(), 1);
        assert_eq!(0x0000_ffffu32.radical_inverse(), 0xffff_0000);
        assert_eq!(0x1234_5678u32.radical_inverse(), 0x1e6a_2c48);

        assert_eq!(1u64.radical_inverse(), 0x8000_0000_0000_0000);
        assert_eq!(6u64.radical_inverse(), 0x6000_0000_0000_0000);
        assert_eq!(u64::MAX.radical_inverse(), u64::MAX);
    }

    #[test]
    fn widths_agree_on_leading_bits() {
        for k in 0..4096u32 {
            let narrow = k.radical_inverse();
            let wide = u64::from(k).radical_inverse();
            assert_eq!(wide >> 32, u64::from(narrow), "k = {}", k);
        }
    }
}
