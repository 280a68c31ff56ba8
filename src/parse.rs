use crate::bitboard::Bitboard;
use crate::error::{BitboardError, Result};
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;
use log::debug;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{digit1, hex_digit1, one_of},
    combinator::{all_consuming, map, map_opt, map_res},
    sequence::{pair, preceded},
    Finish, IResult,
};

fn square_parser(input: &str) -> IResult<&str, Square> {
    map_opt(
        pair(one_of("abcdefghABCDEFGH"), one_of("12345678")),
        |(f, r)| Some(Square::new(File::from_char(f)?, Rank::from_char(r)?)),
    )(input)
}

/*
 * Bitboard literal: hex with a 0x prefix, or plain decimal.
 */
fn bitboard_parser(input: &str) -> IResult<&str, Bitboard> {
    let hex = map_res(preceded(tag_no_case("0x"), hex_digit1), |s: &str| {
        u64::from_str_radix(s, 16)
    });
    let decimal = map_res(digit1, |s: &str| s.parse::<u64>());

    map(alt((hex, decimal)), Bitboard::new)(input)
}

pub fn parse_square(input: &str) -> Result<Square> {
    all_consuming(square_parser)(input.trim())
        .finish()
        .map(|(_, square)| square)
        .map_err(|e| BitboardError::ParseError(format!("Could not parse square '{}': {}", input, e)))
}

pub fn parse_bitboard(input: &str) -> Result<Bitboard> {
    debug!("Parsing bitboard: {}", input);

    all_consuming(bitboard_parser)(input.trim())
        .finish()
        .map(|(_, bb)| bb)
        .map_err(|e| {
            BitboardError::ParseError(format!("Could not parse bitboard '{}': {}", input, e))
        })
}

#[cfg(test)]
use crate::square::*;

#[cfg(test)]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_parse_square() {
    assert_eq!(parse_square("a1"), Ok(A1));
    assert_eq!(parse_square("E4"), Ok(E4));
    assert_eq!(parse_square("h8"), Ok(H8));
}

#[test]
fn test_parse_square_rejects_garbage() {
    assert!(parse_square("i1").is_err());
    assert!(parse_square("a9").is_err());
    assert!(parse_square("a").is_err());
    assert!(parse_square("a1b").is_err());
}

#[test]
fn test_parse_bitboard_hex() {
    init();

    assert_eq!(parse_bitboard("0x42"), Ok(Bitboard::new(0x42)));
    assert_eq!(
        parse_bitboard("0XFFFFFFFFFFFFFFFF"),
        Ok(Bitboard::full())
    );
    assert_eq!(parse_bitboard(" 0x8000000000000000 "), Ok(bitboard![H8]));
}

#[test]
fn test_parse_bitboard_decimal() {
    init();

    assert_eq!(parse_bitboard("0"), Ok(Bitboard::empty()));
    assert_eq!(parse_bitboard("66"), Ok(Bitboard::new(0x42)));
}

#[test]
fn test_parse_bitboard_errors() {
    init();

    // one bit too many
    assert!(parse_bitboard("0x10000000000000000").is_err());
    assert!(parse_bitboard("18446744073709551616").is_err());
    assert!(parse_bitboard("0x").is_err());
    assert!(parse_bitboard("0xg1").is_err());
    assert!(parse_bitboard("").is_err());
}
