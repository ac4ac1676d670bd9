//! Parsing utilities for structure format strings
//!
//! A format string is split on its first comma into an outer part
//! (delimiter characters) and a cell part (`[width][.precision]`).

use crate::error::{NumeralError, Result};

/// Split a format string into `(outer, cell)` on the first comma
///
/// Without a comma the whole string is the outer part.
pub fn split_format(format: &str) -> (&str, &str) {
    match format.find(',') {
        Some(comma) => (&format[..comma], &format[comma + 1..]),
        None => (format, ""),
    }
}

/// Parse a cell spec of the form `[width][.precision]`
///
/// Returns `(width, precision)`; an empty spec yields `(None, None)`.
pub fn parse_cell_spec(spec: &str) -> Result<(Option<usize>, Option<usize>)> {
    let (width_str, precision_str) = match spec.find('.') {
        Some(dot) => (&spec[..dot], Some(&spec[dot + 1..])),
        None => (spec, None),
    };

    let width = if width_str.is_empty() {
        None
    } else {
        Some(parse_usize(width_str)?)
    };

    let precision = match precision_str {
        Some("") => return Err(NumeralError::InvalidFormat("missing precision after '.'")),
        Some(digits) => Some(parse_usize(digits)?),
        None => None,
    };

    Ok((width, precision))
}

/// Parse a usize from a string with error handling
fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(NumeralError::InvalidFormat("empty number"));
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(NumeralError::InvalidFormat("expected digits"));
        }

        let digit = (byte - b'0') as usize;

        // Check for overflow
        if result > (usize::MAX - digit) / 10 {
            return Err(NumeralError::InvalidFormat("number too large"));
        }

        result = result * 10 + digit;
    }

    Ok(result)
}
