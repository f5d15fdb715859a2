//! Numeral reading for quantities and timer magnitudes.
//!
//! The parser keeps quantities as raw text. Consumers that want a number call [`Numeral::parse`], which accepts
//! decimals (`"1.5"`), rationals (`"1/2"`, `"1 / 2"`) and mixed numbers (`"1 1/2"`).
//!
//! ## Notes
//! - Reading never combines or scales values; [`Numeral::to_f64`] is the only lossy step.
//! - Non-finite decimals (`inf`, `NaN`) are rejected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A number read from recipe text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeral {
    Decimal(f64),
    /// `numer / denom`, with `denom != 0`.
    Rational {
        numer: i64,
        denom: i64,
    },
}

/// Reasons a piece of text is not a numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("empty numeral")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),
}

impl Numeral {
    /// Read `text` (surrounding whitespace ignored) as a decimal, rational, or mixed number.
    pub fn parse(text: &str) -> Result<Self, NumeralError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NumeralError::Empty);
        }
        let not_a_number = || NumeralError::NotANumber(text.to_string());

        let Some((left, right)) = text.split_once('/') else {
            return match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Numeral::Decimal(value)),
                _ => Err(not_a_number()),
            };
        };

        let denom = parse_integer(right).ok_or_else(not_a_number)?;
        if denom == 0 {
            return Err(NumeralError::ZeroDenominator(text.to_string()));
        }

        // `1 1/2`: whole part, whitespace, then a non-negative fraction. The sign of the whole part applies to
        // the fraction as well, so `-1 1/2` is -3/2.
        let left = left.trim();
        let numer = match left.rsplit_once(char::is_whitespace) {
            Some((whole_text, fraction)) => {
                let whole = parse_integer(whole_text).ok_or_else(not_a_number)?;
                let fraction = parse_integer(fraction)
                    .filter(|n| *n >= 0 && denom > 0)
                    .ok_or_else(not_a_number)?;
                let magnitude = whole
                    .checked_abs()
                    .and_then(|w| w.checked_mul(denom))
                    .and_then(|w| w.checked_add(fraction))
                    .ok_or_else(not_a_number)?;
                if whole_text.trim().starts_with('-') { -magnitude } else { magnitude }
            }
            None => parse_integer(left).ok_or_else(not_a_number)?,
        };

        Ok(Numeral::Rational { numer, denom })
    }

    /// Check whether `text` reads as a numeral.
    pub fn is_numeral(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Approximate the numeral as a float.
    pub fn to_f64(self) -> f64 {
        match self {
            Numeral::Decimal(value) => value,
            Numeral::Rational { numer, denom } => numer as f64 / denom as f64,
        }
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

impl FromStr for Numeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Numeral::parse(s)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeral::Decimal(value) => write!(f, "{value}"),
            Numeral::Rational { numer, denom } => write!(f, "{numer}/{denom}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals() {
        assert_eq!(Numeral::parse("3"), Ok(Numeral::Decimal(3.0)));
        assert_eq!(Numeral::parse(" 1.5 "), Ok(Numeral::Decimal(1.5)));
        assert_eq!(Numeral::parse("-2"), Ok(Numeral::Decimal(-2.0)));
    }

    #[test]
    fn rationals() {
        assert_eq!(Numeral::parse("1/2"), Ok(Numeral::Rational { numer: 1, denom: 2 }));
        assert_eq!(Numeral::parse("1 / 2"), Ok(Numeral::Rational { numer: 1, denom: 2 }));
        assert_eq!(Numeral::parse("1/2").map(Numeral::to_f64), Ok(0.5));
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(Numeral::parse("1 1/2"), Ok(Numeral::Rational { numer: 3, denom: 2 }));
        assert_eq!("2 3/4".parse::<Numeral>().map(Numeral::to_f64), Ok(2.75));
    }

    #[test]
    fn negative_mixed_numbers_keep_their_sign() {
        assert_eq!(Numeral::parse("-1 1/2"), Ok(Numeral::Rational { numer: -3, denom: 2 }));
        assert_eq!(Numeral::parse("-1 1/2").map(Numeral::to_f64), Ok(-1.5));
        assert_eq!(Numeral::parse("-0 1/2").map(Numeral::to_f64), Ok(-0.5));
        assert_eq!(Numeral::parse("-1/2").map(Numeral::to_f64), Ok(-0.5));
    }

    #[test]
    fn mixed_numbers_need_a_non_negative_fraction() {
        assert_eq!(
            Numeral::parse("1 -1/2"),
            Err(NumeralError::NotANumber("1 -1/2".to_string()))
        );
        assert_eq!(
            Numeral::parse("1 1/-2"),
            Err(NumeralError::NotANumber("1 1/-2".to_string()))
        );
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(Numeral::parse(""), Err(NumeralError::Empty));
        assert_eq!(Numeral::parse("   "), Err(NumeralError::Empty));
        assert_eq!(Numeral::parse("few"), Err(NumeralError::NotANumber("few".to_string())));
        assert_eq!(Numeral::parse("1,5"), Err(NumeralError::NotANumber("1,5".to_string())));
        assert_eq!(Numeral::parse("1/x"), Err(NumeralError::NotANumber("1/x".to_string())));
        assert!(!Numeral::is_numeral("inf"));
        assert!(!Numeral::is_numeral("NaN"));
        assert!(!Numeral::is_numeral("1.5/2"));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            Numeral::parse("1/0"),
            Err(NumeralError::ZeroDenominator("1/0".to_string()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(Numeral::Rational { numer: 3, denom: 4 }.to_string(), "3/4");
        assert_eq!(Numeral::Decimal(1.5).to_string(), "1.5");
    }
}
