use std::fmt;

use BitboardError::*;

pub type Result<T> = std::result::Result<T, BitboardError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitboardError {
    /// Bit-scan on a bitboard with no set bits
    EmptyBitboard,
    SquareOutOfRange(usize),
    ParseError(String),
}

impl fmt::Display for BitboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyBitboard => write!(f, "Cannot bit-scan an empty bitboard"),
            SquareOutOfRange(i) => write!(f, "Square index {} is out of range", i),
            ParseError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BitboardError {}

#[test]
fn test_display() {
    assert_eq!(
        EmptyBitboard.to_string(),
        "Cannot bit-scan an empty bitboard"
    );
    assert_eq!(
        SquareOutOfRange(64).to_string(),
        "Square index 64 is out of range"
    );
}
