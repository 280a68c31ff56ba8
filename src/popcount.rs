/*
 * POPULATION COUNT: the number of one bits in a bitboard.
 *
 * Byte counts follow the recurrence
 *   f(0) = 0
 *   f(n) = f(n >> 1) + (n & 1)    for n > 0
 * which only ever reads entries that are already filled in.
 */
use crate::constants::N_BYTE_VALUES;

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    pub static ref POP_COUNT_BYTE: ByteCountTable = ByteCountTable::new();
}

#[derive(Clone, PartialEq, Eq)]
pub struct ByteCountTable {
    counts: [u8; N_BYTE_VALUES],
}

impl ByteCountTable {
    pub fn new() -> Self {
        let mut counts = [0u8; N_BYTE_VALUES];

        for i in 1..N_BYTE_VALUES {
            counts[i] = counts[i >> 1] + (i & 1) as u8;
        }

        debug!("Built population count table for {} byte values", N_BYTE_VALUES);

        ByteCountTable { counts }
    }

    #[inline]
    pub fn count(&self, byte: u8) -> u8 {
        self.counts[byte as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }
}

impl Default for ByteCountTable {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Force construction of the shared byte count table. Safe to call any number
 * of times; popcount builds the table on first use anyway.
 */
pub fn initialize_popcount_table() {
    lazy_static::initialize(&POP_COUNT_BYTE);
}

/*
 * Sum the byte counts of all eight bytes, least significant first.
 */
#[inline]
pub fn popcount(bb: u64) -> u32 {
    let table = &*POP_COUNT_BYTE;

    bb.to_le_bytes()
        .iter()
        .map(|byte| table.count(*byte) as u32)
        .sum()
}

#[cfg(test)]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
fn naive_popcount(bb: u64) -> u32 {
    (0..64).filter(|i| bb >> i & 1 == 1).count() as u32
}

#[test]
fn test_byte_table_matches_naive_count() {
    init();

    let table = ByteCountTable::new();
    for (i, count) in table.as_slice().iter().enumerate() {
        assert_eq!(*count as u32, naive_popcount(i as u64), "byte {}", i);
    }
}

#[test]
fn test_byte_table_ends() {
    let table = ByteCountTable::new();
    assert_eq!(table.count(0), 0);
    assert_eq!(table.count(1), 1);
    assert_eq!(table.count(0x80), 1);
    assert_eq!(table.count(0xff), 8);
}

#[test]
fn test_initialize_is_idempotent() {
    init();

    initialize_popcount_table();
    let first = POP_COUNT_BYTE.clone();
    initialize_popcount_table();

    assert!(first == *POP_COUNT_BYTE);
    assert!(ByteCountTable::new() == first);
}

#[test]
fn test_popcount_fixed_values() {
    assert_eq!(popcount(0), 0);
    assert_eq!(popcount(u64::MAX), 64);
    assert_eq!(popcount(0x8000000000000000), 1);
    assert_eq!(popcount(0x1), 1);
    assert_eq!(popcount(0x42), 2);
    assert_eq!(popcount(0x00ff00000000ff00), 16);
}

#[test]
fn test_popcount_without_explicit_initialize() {
    // table is built lazily, so no startup call is required
    assert_eq!(popcount(0xf0f0f0f0f0f0f0f0), 32);
}

#[test]
fn test_popcount_single_bits() {
    for i in 0..64 {
        assert_eq!(popcount(1 << i), 1);
    }
}
