//! Token parsing utilities for Matrix Market text
//!
//! Pure functions mapping single whitespace separated tokens to numbers. Every
//! failure maps to `ErrorKind::InputScanError`.

use crate::{ErrorKind, Result};
use core::str::SplitWhitespace;

/// Parse a non-negative decimal count or dimension
pub fn parse_count(token: &str) -> Result<usize> {
    // usize::from_str accepts a leading '+', which is fine for counts
    token.parse::<usize>().map_err(|_| ErrorKind::InputScanError)
}

/// Parse a 1-based coordinate and convert it to 0-based
pub fn parse_coordinate(token: &str) -> Result<usize> {
    match parse_count(token)? {
        0 => Err(ErrorKind::InputScanError),
        n => Ok(n - 1),
    }
}

/// Parse a floating point value
pub fn parse_real(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| ErrorKind::InputScanError)
}

/// Parse a signed integer value
pub fn parse_integer(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| ErrorKind::InputScanError)
}

/// Take exactly `N` tokens from a line, failing on too few or too many
pub fn take_exact<'a, const N: usize>(mut tokens: SplitWhitespace<'a>) -> Result<[&'a str; N]> {
    let mut out = [""; N];
    for slot in out.iter_mut() {
        *slot = tokens.next().ok_or(ErrorKind::InputScanError)?;
    }

    if tokens.next().is_some() {
        return Err(ErrorKind::InputScanError);
    }

    Ok(out)
}

/// Returns true for a line holding only whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns true for a comment line (first character is `%`)
pub fn is_comment(line: &str) -> bool {
    line.starts_with(crate::format::constants::COMMENT_PREFIX)
}
