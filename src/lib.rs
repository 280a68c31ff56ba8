/*
 * Bit-level primitives for 8x8 board engines: population count and forward
 * bit-scan over 64-bit bitboards, plus the square types that fix the
 * bit-to-square mapping (a1 = bit 0, h8 = bit 63).
 */
#[macro_use]
pub mod bitboard;
pub mod bitscan;
pub mod constants;
pub mod error;
pub mod file;
pub mod parse;
pub mod popcount;
pub mod rank;
pub mod square;

pub use bitboard::Bitboard;
pub use bitscan::bit_scan_forward;
pub use error::{BitboardError, Result};
pub use popcount::{initialize_popcount_table, popcount};
