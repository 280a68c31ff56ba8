use crate::bitscan::{bit_scan_forward, bit_scan_forward_unchecked};
use crate::error::Result;
use crate::file::*;
use crate::popcount::popcount;
use crate::rank::*;
use crate::square::*;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/*
 * Square mapping is little-endian rank-file: bit 0 is a1, bit 7 is h1,
 * bit 8 is a2 and bit 63 is h8, i.e. index = rank * 8 + file. Everything
 * in this crate (Square, the file and rank masks, Display) assumes it.
 *
 * Any u64 is a valid bitboard.
 *
 * See https://www.chessprogramming.org/Square_Mapping_Considerations
 */

pub const A_FILE: Bitboard = Bitboard(0x0101010101010101);
pub const B_FILE: Bitboard = Bitboard(0x0202020202020202);
pub const C_FILE: Bitboard = Bitboard(0x0404040404040404);
pub const D_FILE: Bitboard = Bitboard(0x0808080808080808);
pub const E_FILE: Bitboard = Bitboard(0x1010101010101010);
pub const F_FILE: Bitboard = Bitboard(0x2020202020202020);
pub const G_FILE: Bitboard = Bitboard(0x4040404040404040);
pub const H_FILE: Bitboard = Bitboard(0x8080808080808080);

pub const ALL_FILES: [Bitboard; 8] = [
    A_FILE, B_FILE, C_FILE, D_FILE, E_FILE, F_FILE, G_FILE, H_FILE,
];

pub const RANK_1: Bitboard = Bitboard(0x00000000000000ff);
pub const RANK_2: Bitboard = Bitboard(0x000000000000ff00);
pub const RANK_3: Bitboard = Bitboard(0x0000000000ff0000);
pub const RANK_4: Bitboard = Bitboard(0x00000000ff000000);
pub const RANK_5: Bitboard = Bitboard(0x000000ff00000000);
pub const RANK_6: Bitboard = Bitboard(0x0000ff0000000000);
pub const RANK_7: Bitboard = Bitboard(0x00ff000000000000);
pub const RANK_8: Bitboard = Bitboard(0xff00000000000000);

pub const ALL_RANKS: [Bitboard; 8] = [
    RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8,
];

#[macro_export]
macro_rules! bitboard {
    ( $( $square:expr ),* ) => {
        $crate::bitboard::Bitboard::empty()
            $(
                .set($square)
            )*
    };
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    pub const fn empty() -> Self {
        Bitboard(0x0)
    }

    pub const fn full() -> Self {
        Self(u64::MAX)
    }

    pub fn from_square(square: Square) -> Self {
        Bitboard(square.bit())
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn set(&self, square: Square) -> Self {
        Bitboard(self.0 | square.bit())
    }

    pub fn unset(&self, square: Square) -> Self {
        Bitboard(self.0 & !square.bit())
    }

    pub fn is_set(&self, square: Square) -> bool {
        self.0 & square.bit() != 0
    }

    pub fn set_all(squares: &[Square]) -> Self {
        squares
            .iter()
            .fold(Bitboard::empty(), |board, square| board.set(*square))
    }

    /*
     * Return all set squares in the bitboard, lowest index first
     */
    pub fn squares(&self) -> SquareIterator {
        SquareIterator::new(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn non_empty(&self) -> bool {
        self.0 != 0
    }

    // least significant set bit, Err on an empty board
    pub fn bitscan_forward(&self) -> Result<Square> {
        bit_scan_forward(self.0).map(|i| Square::from_index(i as usize))
    }

    pub fn lowest_set_bit(&self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_neg())
    }

    pub fn without_lowest_set_bit(&self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    pub fn popcnt(&self) -> u32 {
        popcount(self.0)
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Bitboard::from_square(square)
    }
}

pub fn bitboard_for_file(file: File) -> Bitboard {
    ALL_FILES[file.index() as usize]
}

pub fn bitboard_for_rank(rank: Rank) -> Bitboard {
    ALL_RANKS[rank.index() as usize]
}

pub struct SquareIterator {
    bitboard: Bitboard,
}

impl SquareIterator {
    fn new(bitboard: &Bitboard) -> Self {
        SquareIterator {
            bitboard: *bitboard,
        }
    }
}

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            None
        } else {
            let index = bit_scan_forward_unchecked(self.bitboard.0) as usize;
            self.bitboard = self.bitboard.without_lowest_set_bit();
            Some(Square::from_index(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.popcnt() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIterator {}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Shl<usize> for Bitboard {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self::Output {
        Self(self.0 << rhs)
    }
}

impl Shr<usize> for Bitboard {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        Self(self.0 >> rhs)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard(")?;
        fmt::LowerHex::fmt(&self.0, f)?; // delegate to u64's implementation
        write!(f, ")")
    }
}

/*
 * 8x8 diagram, rank 8 on top and the a-file on the left
 */
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in RANKS.iter().rev() {
            for file in FILES.iter() {
                let symbol = if self.is_set(Square::new(*file, *rank)) {
                    '1'
                } else {
                    '.'
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }

        fmt::Result::Ok(())
    }
}

#[cfg(test)]
use crate::error::BitboardError;

#[test]
fn test_square() {
    let b = Bitboard::set_all(&[D2, H4, A6]);
    assert_eq!(b.squares().collect::<Vec<Square>>(), vec![D2, H4, A6]);
}

#[test]
fn test_print() {
    let board = bitboard![G1, G2, G3, G4, G5, G6, G7, G8];
    let expected = ". . . . . . 1 . \n".repeat(8);
    assert_eq!(board.to_string(), expected);
    assert_eq!(format!("{:#x}", board), "Bitboard(0x4040404040404040)");
}

#[test]
fn test_print_orientation() {
    let board = bitboard![A1, H8];
    let lines: Vec<String> = board.to_string().lines().map(String::from).collect();
    assert_eq!(lines[0], ". . . . . . . 1 ");
    assert_eq!(lines[7], "1 . . . . . . . ");
}

#[test]
fn test_bitboard_squares_no_panic_when_h8_is_set() {
    let squares = vec![F8, H8];
    let bitboard = Bitboard::set_all(&squares);
    assert_eq!(squares, bitboard.squares().collect::<Vec<Square>>());
}

#[test]
fn test_squares_len_matches_popcnt() {
    let board = bitboard![A1, C3, E5, G7, H8];
    assert_eq!(board.squares().len(), 5);
    assert_eq!(board.popcnt(), 5);
}

#[test]
fn test_lowest_set_bit() {
    assert_eq!(bitboard![C8, A2].lowest_set_bit(), bitboard![A2]);
    assert_eq!(bitboard![H8, C8, A1].lowest_set_bit(), bitboard![A1]);
    assert_eq!(bitboard![A1].lowest_set_bit(), bitboard![A1]);
    assert_eq!(bitboard![].lowest_set_bit(), bitboard![]);
}

#[test]
fn test_without_lowest_set_bit() {
    assert_eq!(bitboard![C8, A2].without_lowest_set_bit(), bitboard![C8]);
    assert_eq!(bitboard![A1].without_lowest_set_bit(), bitboard![]);
    assert_eq!(bitboard![].without_lowest_set_bit(), bitboard![]);
}

#[test]
fn test_bitscan_forward() {
    assert_eq!(bitboard![C8, A2].bitscan_forward(), Ok(A2));
    assert_eq!(bitboard![H8].bitscan_forward(), Ok(H8));
    assert_eq!(
        Bitboard::empty().bitscan_forward(),
        Err(BitboardError::EmptyBitboard)
    );
}

#[test]
fn test_set_and_unset() {
    let board = bitboard![E4];
    assert!(board.is_set(E4));
    assert!(!board.is_set(E5));
    assert_eq!(board.unset(E4), Bitboard::empty());
    // unsetting a clear square leaves the board alone
    assert_eq!(board.unset(D4), board);
}

#[test]
fn test_bitboard_for_file() {
    assert_eq!(bitboard_for_file(File::A), A_FILE);
    assert_eq!(bitboard_for_file(File::C), C_FILE);
    assert_eq!(bitboard_for_file(File::H), H_FILE);
}

#[test]
fn test_bitboard_for_rank() {
    assert_eq!(bitboard_for_rank(Rank::_1), RANK_1);
    assert_eq!(bitboard_for_rank(Rank::_5), RANK_5);
    assert_eq!(bitboard_for_rank(Rank::_8), RANK_8);
}

#[test]
fn test_masks_agree_with_squares() {
    for square in Square::all_squares() {
        assert!(bitboard_for_file(square.file()).is_set(square));
        assert!(bitboard_for_rank(square.rank()).is_set(square));
        assert_eq!(
            bitboard_for_file(square.file()) & bitboard_for_rank(square.rank()),
            Bitboard::from_square(square)
        );
    }
}

#[test]
fn test_operators() {
    assert_eq!(A_FILE | H_FILE, Bitboard::new(0x8181818181818181));
    assert_eq!(!Bitboard::empty(), Bitboard::full());
    assert_eq!(RANK_1 ^ RANK_1, Bitboard::empty());
    assert_eq!(RANK_1 << 8, RANK_2);
    assert_eq!(RANK_8 >> 56, RANK_1);

    let mut board = RANK_1;
    board &= A_FILE;
    assert_eq!(board, bitboard![A1]);
}
