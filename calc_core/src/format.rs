//! # Numeral Formatting
//!
//! Conversion between the display's numeral strings and `f64` values.
//!
//! ## Design Philosophy
//!
//! The display is the source of truth for user input, so the string side of
//! this boundary has to be lossless: `format_number` uses Rust's
//! shortest-round-trip float rendering, which prints integer-valued floats
//! as plain integers (`5.0` -> `"5"`) and everything else with the minimal
//! decimal digits that parse back to the same value. Parsing is defensive;
//! a display string that fails to parse is an engine bug surfaced as
//! `ParseError`, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_number, parse_numeral};
//!
//! assert_eq!(format_number(5.0), "5");
//! assert_eq!(format_number(5.5), "5.5");
//! assert_eq!(parse_numeral("5.5").unwrap(), 5.5);
//! ```

use crate::errors::{CalcError, CalcResult};

/// Format a finite number as a display numeral.
///
/// Integer-valued floats render without a fractional part; other values use
/// the minimal decimal representation that parses back to the same `f64`.
/// Negative zero collapses to `"0"`. Callers guarantee finiteness - engine
/// arithmetic rejects non-finite results before they reach the display.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // collapses -0.0, which Display would render as "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Parse a display numeral back into a number.
///
/// Fails with `ParseError` for malformed text and for the non-finite
/// spellings (`inf`, `NaN`) that `f64::from_str` would otherwise accept,
/// since the display never legitimately holds them.
pub fn parse_numeral(text: &str) -> CalcResult<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|_| CalcError::parse_error(text))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::parse_error(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integers_format_plain() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(15.0), "15");
    }

    #[test]
    fn test_fractions_keep_minimal_digits() {
        assert_eq!(format_number(5.5), "5.5");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-0.5), "-0.5");
    }

    #[test]
    fn test_negative_zero_collapses() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_large_integers_stay_decimal() {
        // Display formatting never switches to exponent notation
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_parse_accepts_display_output() {
        assert_eq!(parse_numeral("5").unwrap(), 5.0);
        assert_eq!(parse_numeral("5.5").unwrap(), 5.5);
        assert_eq!(parse_numeral("-9").unwrap(), -9.0);
        // a trailing decimal point is a valid in-progress numeral
        assert_eq!(parse_numeral("3.").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(matches!(
            parse_numeral(""),
            Err(CalcError::ParseError { .. })
        ));
        assert!(matches!(
            parse_numeral("1.2.3"),
            Err(CalcError::ParseError { .. })
        ));
        assert!(matches!(
            parse_numeral("abc"),
            Err(CalcError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        assert!(parse_numeral("inf").is_err());
        assert!(parse_numeral("-inf").is_err());
        assert!(parse_numeral("NaN").is_err());
    }

    #[test]
    fn test_canonical_numerals_roundtrip_exactly() {
        for text in ["5", "5.5", "-9", "0.5", "123.456", "0"] {
            let value = parse_numeral(text).unwrap();
            assert_eq!(format_number(value), text);
        }
    }

    proptest! {
        #[test]
        fn prop_format_parse_roundtrip(value in -1e300f64..1e300f64) {
            prop_assume!(value.is_finite());
            let text = format_number(value);
            let reparsed = parse_numeral(&text).unwrap();
            // shortest-round-trip rendering makes this exact, not approximate
            prop_assert_eq!(reparsed, value);
        }

        #[test]
        fn prop_formatted_numerals_have_at_most_one_dot(value in -1e300f64..1e300f64) {
            prop_assume!(value.is_finite());
            let text = format_number(value);
            prop_assert!(text.matches('.').count() <= 1);
            prop_assert!(!text.is_empty());
        }
    }
}
