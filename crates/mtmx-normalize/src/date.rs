//! SWIFT 6-digit date normalization.

use chrono::NaiveDate;

use crate::NormalizeError;

/// Convert a `YYMMDD` value to a calendar date.
///
/// The century is fixed at `2000 + YY`. This is a documented assumption of
/// the engine, not a verified business rule: SWIFT messages in circulation
/// today carry no 19xx value dates, and no rollover pivot is applied.
pub fn date_yymmdd(raw: &str) -> Result<NaiveDate, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::InvalidDate(raw.to_string()));
    }
    let invalid = || NormalizeError::InvalidDate(raw.to_string());
    let yy: i32 = trimmed[0..2].parse().map_err(|_| invalid())?;
    let mm: u32 = trimmed[2..4].parse().map_err(|_| invalid())?;
    let dd: u32 = trimmed[4..6].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + yy, mm, dd)
        .ok_or_else(|| NormalizeError::InvalidDate(raw.to_string()))
}

/// Convert an `MMDD` booking date, taking the year from the value date.
///
/// MT `61` entry dates carry no year; year-end rollover (value date in
/// January, booking date in December) is resolved toward the nearer year.
pub fn date_mmdd(raw: &str, value_date: NaiveDate) -> Result<NaiveDate, NormalizeError> {
    use chrono::Datelike;

    let trimmed = raw.trim();
    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NormalizeError::InvalidDate(raw.to_string()));
    }
    let invalid = || NormalizeError::InvalidDate(raw.to_string());
    let mm: u32 = trimmed[0..2].parse().map_err(|_| invalid())?;
    let dd: u32 = trimmed[2..4].parse().map_err(|_| invalid())?;

    let year = value_date.year();
    let candidate = NaiveDate::from_ymd_opt(year, mm, dd)
        .ok_or_else(|| NormalizeError::InvalidDate(raw.to_string()))?;

    // A December booking date against a January value date belongs to the
    // previous year.
    if value_date.month() == 1 && mm == 12 {
        return NaiveDate::from_ymd_opt(year - 1, mm, dd)
            .ok_or_else(|| NormalizeError::InvalidDate(raw.to_string()));
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_is_fixed_at_2000() {
        assert_eq!(
            date_yymmdd("231005").unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 5).unwrap()
        );
        // No 50-pivot: 99 means 2099, not 1999.
        assert_eq!(
            date_yymmdd("990101").unwrap(),
            NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
        );
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(date_yymmdd("2310").is_err());
        assert!(date_yymmdd("231332").is_err());
        assert!(date_yymmdd("23100a").is_err());
    }

    #[test]
    fn booking_date_takes_value_year() {
        let value = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(
            date_mmdd("1003", value).unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 3).unwrap()
        );
    }

    #[test]
    fn booking_date_rolls_back_over_year_end() {
        let value = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            date_mmdd("1230", value).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 30).unwrap()
        );
    }
}
