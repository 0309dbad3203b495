//! Turning puzzle text into matrices and grids

use crate::io::configuration::DIGIT_RADIX;
use crate::io::error::{Result, invalid_input};
use crate::spatial::Grid;

/// Non-blank lines of `input`, with trailing carriage returns removed
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}

/// One row per non-blank line, one element per character
pub fn parse_matrix<T, F>(input: &str, mut convert: F) -> Vec<Vec<T>>
where
    F: FnMut(char) -> T,
{
    split_lines(input)
        .map(|line| line.chars().map(&mut convert).collect::<Vec<T>>())
        .collect()
}

/// Like [`parse_matrix`], for conversions that can fail
///
/// # Errors
///
/// Returns the first error produced by `convert`
pub fn try_parse_matrix<T, F>(input: &str, mut convert: F) -> Result<Vec<Vec<T>>>
where
    F: FnMut(char) -> Result<T>,
{
    split_lines(input)
        .map(|line| line.chars().map(&mut convert).collect::<Result<Vec<T>>>())
        .collect()
}

/// Grid with one resolved cell per character of `input`
///
/// # Errors
///
/// Returns `RaggedRow` if the lines differ in length
pub fn parse_grid<T, F>(input: &str, convert: F) -> Result<Grid<T>>
where
    F: FnMut(char) -> T,
{
    Grid::from_matrix(parse_matrix(input, convert))
}

/// The only character of `text`
///
/// # Errors
///
/// Returns `InvalidInput` unless `text` holds exactly one character
pub fn single_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => Ok(only),
        _ => Err(invalid_input(&text, &"expected exactly one character")),
    }
}

/// Numeric value of a decimal digit
///
/// # Errors
///
/// Returns `InvalidInput` for anything but `0` to `9`
pub fn digit(character: char) -> Result<u32> {
    character
        .to_digit(DIGIT_RADIX)
        .ok_or_else(|| invalid_input(&character, &"expected a decimal digit"))
}
