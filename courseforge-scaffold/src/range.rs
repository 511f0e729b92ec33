//! Module range parsing for the batch driver (`2-30`, or a single `7`).

use std::ops::RangeInclusive;

use thiserror::Error;

/// Errors produced when parsing a module range argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// The range or one of its bounds is not a number.
    #[error("invalid module number '{0}'")]
    InvalidNumber(String),

    /// The start of the range is greater than the end.
    #[error("range start {start} is greater than end {end}")]
    Inverted {
        /// First module in the range.
        start: u8,
        /// Last module in the range.
        end: u8,
    },

    /// Module numbers start at 1.
    #[error("module numbers start at 1")]
    Zero,
}

/// Parses a module range: `"2-30"` for an inclusive span, `"7"` for a
/// single module.
///
/// # Errors
///
/// Returns `RangeError` for non-numeric bounds, inverted ranges, and
/// module number 0.
pub fn parse_range(value: &str) -> Result<RangeInclusive<u8>, RangeError> {
    let parse_bound = |s: &str| {
        s.trim()
            .parse::<u8>()
            .map_err(|_| RangeError::InvalidNumber(s.trim().to_string()))
    };

    let (start, end) = match value.split_once('-') {
        Some((start, end)) => (parse_bound(start)?, parse_bound(end)?),
        None => {
            let single = parse_bound(value)?;
            (single, single)
        }
    };

    if start == 0 || end == 0 {
        return Err(RangeError::Zero);
    }
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }

    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_span() {
        assert_eq!(parse_range("2-30"), Ok(2..=30));
        assert_eq!(parse_range("1-1"), Ok(1..=1));
    }

    #[test]
    fn parses_single_module() {
        assert_eq!(parse_range("7"), Ok(7..=7));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_range(" 2 - 30 "), Ok(2..=30));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_range("two-30"),
            Err(RangeError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            parse_range(""),
            Err(RangeError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn rejects_inverted() {
        assert_eq!(
            parse_range("30-2"),
            Err(RangeError::Inverted { start: 30, end: 2 })
        );
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_range("0-5"), Err(RangeError::Zero));
        assert_eq!(parse_range("0"), Err(RangeError::Zero));
    }
}
