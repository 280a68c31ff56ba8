use itertools::Itertools;
use proptest::prelude::*;

use zenith::bitboard::Bitboard;
use zenith::{bit_scan_forward, initialize_popcount_table, popcount, BitboardError};

fn naive_popcount(bb: u64) -> u32 {
    (0..64).filter(|i| (bb >> i) & 1 == 1).count() as u32
}

proptest! {
    #[test]
    fn prop_popcount_matches_bit_by_bit_count(bb in any::<u64>()) {
        prop_assert_eq!(popcount(bb), naive_popcount(bb));
    }

    #[test]
    fn prop_bit_scan_finds_lowest_set_bit(bb in 1..=u64::MAX) {
        let k = bit_scan_forward(bb).unwrap();
        prop_assert!(k < 64);
        prop_assert_eq!((bb >> k) & 1, 1);
        // nothing set below k
        prop_assert_eq!(bb & ((1u64 << k) - 1), 0);
    }

    #[test]
    fn prop_clearing_lowest_bit_reaches_zero_after_popcount_steps(bb in 1..=u64::MAX) {
        let n = popcount(bb);
        let mut board = bb;
        for step in 1..=n {
            prop_assert!(board != 0, "ran out of bits at step {}", step);
            let k = bit_scan_forward(board).unwrap();
            prop_assert_eq!(board & (1u64 << k), board & board.wrapping_neg());
            board &= board - 1;
        }
        prop_assert_eq!(board, 0);
    }

    #[test]
    fn prop_squares_iterator_visits_every_set_bit(bb in any::<u64>()) {
        let board = Bitboard::new(bb);
        let rebuilt = board
            .squares()
            .fold(Bitboard::empty(), |acc, square| acc.set(square));
        prop_assert_eq!(rebuilt, board);
        prop_assert_eq!(board.squares().count() as u32, popcount(bb));
    }
}

#[test]
fn test_fixed_values() {
    initialize_popcount_table();

    assert_eq!(popcount(0), 0);
    assert_eq!(popcount(0xFFFFFFFFFFFFFFFF), 64);
    assert_eq!(popcount(0x8000000000000000), 1);

    assert_eq!(bit_scan_forward(0x1), Ok(0));
    assert_eq!(bit_scan_forward(0x8000000000000000), Ok(63));
    assert_eq!(bit_scan_forward(0x42), Ok(1));
}

#[test]
fn test_bit_scan_of_zero_is_rejected() {
    assert_eq!(bit_scan_forward(0), Err(BitboardError::EmptyBitboard));
}

#[test]
fn test_every_two_bit_bitboard() {
    for (lo, hi) in (0..64u32).tuple_combinations() {
        let bb = (1u64 << lo) | (1u64 << hi);
        assert_eq!(popcount(bb), 2);
        assert_eq!(bit_scan_forward(bb), Ok(lo));
    }
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            std::thread::spawn(move || {
                (0..1000u64)
                    .map(|i| i.wrapping_mul(0x9e3779b97f4a7c15) ^ t)
                    .all(|bb| popcount(bb) == bb.count_ones())
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
