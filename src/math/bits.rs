//! Bit-string parsing and conversion

use bitvec::prelude::*;

use crate::io::configuration::MAX_BIT_STRING_LEN;
use crate::io::error::{Result, invalid_input, overflow};

/// Parse a string of `0` and `1` characters, most significant bit first
///
/// Whitespace is ignored.
///
/// # Errors
///
/// Returns `InvalidInput` if any other character is present
pub fn parse_bits(text: &str) -> Result<BitVec> {
    text.chars()
        .filter(|character| !character.is_whitespace())
        .map(|character| match character {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(invalid_input(&text, &"expected a bit string")),
        })
        .collect()
}

/// Numeric value of a bit string, most significant bit first
///
/// # Errors
///
/// Returns `Overflow` for more than 64 bits
pub fn bits_to_decimal(bits: &BitSlice) -> Result<u64> {
    if bits.len() > MAX_BIT_STRING_LEN {
        return Err(overflow(
            "bits_to_decimal",
            &format!("{} bits do not fit in 64", bits.len()),
        ));
    }

    Ok(bits
        .iter()
        .by_vals()
        .fold(0, |acc, bit| (acc << 1) | u64::from(bit)))
}

/// Invert a single bit given as 0 or 1
///
/// # Errors
///
/// Returns `InvalidInput` for any other value
pub fn flip_bit(bit: u8) -> Result<u8> {
    match bit {
        0 | 1 => Ok(bit ^ 1),
        other => Err(invalid_input(&other, &"expected a bit")),
    }
}

/// Invert every bit of a bit string
pub fn flip_bits(bits: &BitSlice) -> BitVec {
    !bits.to_bitvec()
}
