//! Text-to-integer coercion for operation parameters.
//!
//! Every size or offset parameter enters the crate as text and passes
//! through [`to_int`] exactly once, so all downstream arithmetic is on
//! native integers.

use alloc::string::{String, ToString};

use crate::error::{EditError, Result};

/// Parse `text` as a base-10 integer.
///
/// Accepts surrounding whitespace, one leading `+` or `-`, and single `_`
/// separators between digits (`"1_000"`). Anything else, including the
/// empty string and values outside `i64`, fails with
/// [`EditError::InvalidNumber`] carrying the original text.
pub fn to_int(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if !is_digit_run(digits) {
        return Err(EditError::InvalidNumber(text.to_string()));
    }

    let mut cleaned = String::with_capacity(digits.len() + 1);
    if negative {
        cleaned.push('-');
    }
    cleaned.extend(digits.chars().filter(|&c| c != '_'));
    cleaned
        .parse::<i64>()
        .map_err(|_| EditError::InvalidNumber(text.to_string()))
}

/// ASCII digits, optionally grouped by single underscores.
fn is_digit_run(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if !first.is_ascii_digit() || !last.is_ascii_digit() {
        return false;
    }
    bytes
        .windows(2)
        .all(|pair| !(pair[0] == b'_' && pair[1] == b'_'))
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_')
}
