use crate::bitboard::Bitboard;
use crate::constants::*;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Rank {
    _1,
    _2,
    _3,
    _4,
    _5,
    _6,
    _7,
    _8,
}

impl Rank {
    pub fn index(&self) -> u8 {
        use Rank::*;
        match self {
            _1 => 0,
            _2 => 1,
            _3 => 2,
            _4 => 3,
            _5 => 4,
            _6 => 5,
            _7 => 6,
            _8 => 7,
        }
    }

    /*
     * Rank of the square with the given bit index. Panics past h8.
     */
    pub fn from_index(i: usize) -> Self {
        match RANKS.get(i / N_FILES) {
            Some(rank) => *rank,
            None => panic!("Unknown rank for square index {}", i),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| RANKS.get((d as usize).checked_sub(1)?))
            .copied()
    }

    pub fn mask(&self) -> Bitboard {
        Bitboard::new(0xffu64 << (self.index() as usize * N_FILES))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).trim_start_matches("_"))
    }
}

pub const RANKS: [Rank; 8] = [
    Rank::_1,
    Rank::_2,
    Rank::_3,
    Rank::_4,
    Rank::_5,
    Rank::_6,
    Rank::_7,
    Rank::_8,
];

#[test]
fn test_from_char() {
    assert_eq!(Rank::from_char('1'), Some(Rank::_1));
    assert_eq!(Rank::from_char('8'), Some(Rank::_8));
    assert_eq!(Rank::from_char('0'), None);
    assert_eq!(Rank::from_char('9'), None);
    assert_eq!(Rank::from_char('x'), None);
}

#[test]
fn test_display() {
    assert_eq!(Rank::_4.to_string(), "4");
}

#[test]
fn test_mask() {
    assert_eq!(Rank::_1.mask(), crate::bitboard::RANK_1);
    assert_eq!(Rank::_8.mask(), crate::bitboard::RANK_8);
}
