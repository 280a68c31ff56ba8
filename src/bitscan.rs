/*
 * BIT SCANNING (FORWARD): the index of the least significant one bit.
 *
 * `bb ^ (bb - 1)` keeps every bit up to and including the lowest set bit.
 * Multiplying that mask by a De Bruijn sequence puts a distinct 6-bit
 * pattern in the top bits for each possible position, and BSF_INDEX_64
 * maps the pattern back to the index. No branches, no loops.
 *
 * See https://www.chessprogramming.org/BitScan#With_separated_LS1B
 */
use crate::error::{BitboardError, Result};

pub const DEBRUIJN_64: u64 = 0x03f79d71b4cb0a89;

#[rustfmt::skip]
pub const BSF_INDEX_64: [u8; 64] = [
     0, 47,  1, 56, 48, 27,  2, 60,
    57, 49, 41, 37, 28, 16,  3, 61,
    54, 58, 35, 52, 50, 42, 21, 44,
    38, 32, 29, 23, 17, 11,  4, 62,
    46, 55, 26, 59, 40, 36, 15, 53,
    34, 51, 20, 43, 31, 22, 10, 45,
    25, 39, 14, 33, 19, 30,  9, 24,
    13, 18,  8, 12,  7,  6,  5, 63,
];

/*
 * Index (0..63) of the least significant set bit. An empty bitboard has no
 * such bit and is rejected.
 */
#[inline]
pub fn bit_scan_forward(bb: u64) -> Result<u32> {
    if bb == 0 {
        return Err(BitboardError::EmptyBitboard);
    }
    Ok(bit_scan_forward_unchecked(bb))
}

/*
 * Caller guarantees `bb != 0`. On zero the mask is all ones and the result
 * is 63, which is a wrong answer rather than undefined behaviour.
 */
#[inline]
pub(crate) fn bit_scan_forward_unchecked(bb: u64) -> u32 {
    let mask = bb ^ bb.wrapping_sub(1);
    BSF_INDEX_64[(mask.wrapping_mul(DEBRUIJN_64) >> 58) as usize] as u32
}

/*
 * Generate a test asserting the scan of a single-bit bitboard
 */
#[cfg(test)]
macro_rules! single_bit_test {
    ( $( $index:literal ),* ) => {
        $(
            paste::item! {
                #[test]
                fn [<test_single_bit_ $index>]() {
                    assert_eq!(bit_scan_forward(1u64 << $index), Ok($index));
                    // bits above the lowest one must not matter
                    assert_eq!(bit_scan_forward(u64::MAX << $index), Ok($index));
                }
            }
        )*
    };
}

#[cfg(test)]
single_bit_test!(
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63
);

#[test]
fn test_fixed_values() {
    assert_eq!(bit_scan_forward(0x1), Ok(0));
    assert_eq!(bit_scan_forward(0x8000000000000000), Ok(63));
    assert_eq!(bit_scan_forward(0x42), Ok(1));
}

#[test]
fn test_empty_bitboard_is_rejected() {
    assert_eq!(bit_scan_forward(0), Err(BitboardError::EmptyBitboard));
}

#[test]
fn test_table_is_a_permutation() {
    let mut seen = [false; 64];
    for index in BSF_INDEX_64.iter() {
        assert!(!seen[*index as usize], "duplicate index {}", index);
        seen[*index as usize] = true;
    }
}

#[test]
fn test_agrees_with_trailing_zeros() {
    for bb in [0x42u64, 0xdeadbeef00000000, 0x0000_0100_0000_0000, 0xfff0] {
        assert_eq!(bit_scan_forward(bb), Ok(bb.trailing_zeros()));
    }
}
