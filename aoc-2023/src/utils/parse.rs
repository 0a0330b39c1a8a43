//! Small parsing helpers shared by the days

use aoc_solver::ParseError;
use std::fmt::Display;
use std::str::FromStr;

/// Parse every whitespace-separated token of `s` as `T`
pub fn numbers<T>(s: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    s.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{token:?}: {e}")))
        })
        .collect()
}

/// Parse a single trimmed value, naming `what` in the error
pub fn value<T>(s: &str, what: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    s.trim()
        .parse()
        .map_err(|e| ParseError::InvalidFormat(format!("invalid {what} {s:?}: {e}")))
}

/// Wrap an error from a line-oriented parser, numbering lines from 1
pub fn line_error(line_idx: usize, e: impl Display) -> ParseError {
    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(numbers::<i64>(" 1 -2\t3 ").unwrap(), vec![1, -2, 3]);
        assert!(numbers::<u32>("1 x").is_err());
        assert!(numbers::<u32>("").unwrap().is_empty());
    }

    #[test]
    fn test_value_and_line_error() {
        assert_eq!(value::<u8>(" 7 ", "day").unwrap(), 7);
        let err = value::<u8>("300", "day").unwrap_err();
        assert!(err.to_string().contains("invalid day"));
        assert_eq!(
            line_error(2, "bad").to_string(),
            "Invalid format: (line 3) bad"
        );
    }
}
