//! Calendar birth date parsed from caller input.
//!
//! # Responsibility
//! - Parse ISO-ish date strings into a plain calendar date.
//! - Expose day/month/year and the digit string used by the birth chart.
//!
//! # Invariants
//! - Only the calendar date as written is kept; offsets never shift the day.
//! - `year() >= 1`, so every derived sum is non-negative.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const MAX_ERROR_INPUT_CHARS: usize = 64;

/// Birth date as (day, month, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Parses a birth date string.
    ///
    /// Accepted shapes:
    /// - `YYYY-MM-DD`
    /// - `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD HH:MM:SS[.fff]`
    /// - RFC 3339 timestamps with offset (the written date is kept)
    ///
    /// # Errors
    /// - `Empty` when input is blank.
    /// - `Unparseable` when no accepted shape matches a real calendar date.
    /// - `YearOutOfRange` when the year is before 1 CE.
    pub fn parse(input: &str) -> Result<Self, BirthDateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BirthDateError::Empty);
        }

        let date = parse_calendar_date(trimmed)
            .ok_or_else(|| BirthDateError::Unparseable(truncate_input(trimmed)))?;
        Self::from_naive(date)
    }

    /// Builds a birth date from calendar components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, BirthDateError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            BirthDateError::Unparseable(format!("{year:04}-{month:02}-{day:02}"))
        })?;
        Self::from_naive(date)
    }

    fn from_naive(date: NaiveDate) -> Result<Self, BirthDateError> {
        if date.year() < 1 {
            return Err(BirthDateError::YearOutOfRange(date.year()));
        }
        Ok(Self { date })
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Full calendar year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Digits of the date as `YYYYMMDD`, year zero-padded to four digits.
    pub fn digit_string(&self) -> String {
        format!("{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.date
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.naive_local().date())
}

fn truncate_input(value: &str) -> String {
    let mut truncated = value.chars().take(MAX_ERROR_INPUT_CHARS).collect::<String>();
    if value.chars().count() > MAX_ERROR_INPUT_CHARS {
        truncated.push_str("...");
    }
    truncated
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = BirthDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = BirthDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(value: BirthDate) -> Self {
        value.to_string()
    }
}

/// Birth date validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDateError {
    /// Input was empty or whitespace only.
    Empty,
    /// Input is not a recognised date shape or not a real calendar day.
    Unparseable(String),
    /// Parsed year is before 1 CE.
    YearOutOfRange(i32),
}

impl Display for BirthDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "birth date must not be empty"),
            Self::Unparseable(value) => write!(
                f,
                "birth date `{value}` is not a valid calendar date (expected YYYY-MM-DD)"
            ),
            Self::YearOutOfRange(year) => {
                write!(f, "birth date year {year} is out of range (must be >= 1)")
            }
        }
    }
}

impl Error for BirthDateError {}

#[cfg(test)]
mod tests {
    use super::{BirthDate, BirthDateError};

    #[test]
    fn parses_plain_iso_date() {
        let date = BirthDate::parse("1990-05-15").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (15, 5, 1990));
        assert_eq!(date.digit_string(), "19900515");
        assert_eq!(date.to_string(), "1990-05-15");
    }

    #[test]
    fn keeps_written_date_for_timestamps() {
        let naive = BirthDate::parse("1990-05-15T23:30:00").unwrap();
        let offset = BirthDate::parse("1990-05-15T23:30:00-10:00").unwrap();
        let fractional = BirthDate::parse(" 1990-05-15 08:00:00.250 ").unwrap();
        assert_eq!(naive.to_string(), "1990-05-15");
        assert_eq!(offset.to_string(), "1990-05-15");
        assert_eq!(fractional.to_string(), "1990-05-15");
    }

    #[test]
    fn rejects_blank_and_impossible_dates() {
        assert_eq!(BirthDate::parse("   "), Err(BirthDateError::Empty));
        assert!(matches!(
            BirthDate::parse("2023-02-29"),
            Err(BirthDateError::Unparseable(_))
        ));
        assert!(matches!(
            BirthDate::parse("1990-13-01"),
            Err(BirthDateError::Unparseable(_))
        ));
        assert!(matches!(
            BirthDate::parse("hello"),
            Err(BirthDateError::Unparseable(_))
        ));
    }

    #[test]
    fn rejects_year_zero() {
        assert_eq!(
            BirthDate::from_ymd(0, 1, 1),
            Err(BirthDateError::YearOutOfRange(0))
        );
    }

    #[test]
    fn error_input_is_truncated() {
        let long = "x".repeat(200);
        let err = BirthDate::parse(&long).unwrap_err();
        let BirthDateError::Unparseable(echoed) = err else {
            panic!("expected Unparseable");
        };
        assert!(echoed.ends_with("..."));
        assert!(echoed.chars().count() < 80);
    }
}
