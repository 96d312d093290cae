//! Decimal-comma amount normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::NormalizeError;

/// Parse a SWIFT amount string into an unsigned decimal.
///
/// MT amounts use a comma as the decimal separator; a trailing comma with
/// no fractional digits means a zero fractional part (`10000,` → `10000`).
/// A dot separator is tolerated for inputs that already slipped through
/// other systems.
pub fn amount(raw: &str) -> Result<Decimal, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::InvalidAmount(raw.to_string()));
    }

    let separators = trimmed.bytes().filter(|b| *b == b',' || *b == b'.').count();
    if separators > 1 {
        return Err(NormalizeError::InvalidAmount(raw.to_string()));
    }
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b',' || b == b'.')
    {
        return Err(NormalizeError::InvalidAmount(raw.to_string()));
    }

    let dotted = trimmed.replace(',', ".");
    let normalized = dotted.strip_suffix('.').unwrap_or(&dotted);
    if normalized.is_empty() {
        return Err(NormalizeError::InvalidAmount(raw.to_string()));
    }

    Decimal::from_str(normalized).map_err(|_| NormalizeError::InvalidAmount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_comma_means_whole_number() {
        assert_eq!(amount("10000,").unwrap(), Decimal::from_str("10000").unwrap());
    }

    #[test]
    fn comma_is_the_decimal_separator() {
        assert_eq!(amount("1234,56").unwrap(), Decimal::from_str("1234.56").unwrap());
        assert_eq!(amount("0,01").unwrap(), Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn dot_separator_is_tolerated() {
        assert_eq!(amount("99.95").unwrap(), Decimal::from_str("99.95").unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(amount("").is_err());
        assert!(amount(",").is_err());
        assert!(amount("1,2,3").is_err());
        assert!(amount("12a4").is_err());
        assert!(amount("-5,0").is_err());
    }
}
