//! Assembled numerology report and its date-derived parts.
//!
//! # Responsibility
//! - Define the value object handed to renderers and transports.
//! - Keep the wire shape stable (camelCase fields, age labels as strings).
//!
//! # Invariants
//! - A report is built once and never mutated afterwards.
//! - Life-cycle and pinnacle ranges start at age 0, are contiguous, and the
//!   last range is open-ended.
//! - `BirthChart::numbers` always holds all nine keys `1..=9`.

use crate::model::interpretation::{
    AttitudeAnalysis, BirthdayAnalysis, ExpressionAnalysis, LifePathAnalysis, PersonalityAnalysis,
    SoulUrgeAnalysis,
};
use crate::model::number::NumerologyNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Complete profile for one `(full name, birth date)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    /// Caller input, verbatim.
    pub full_name: String,
    /// Caller input, verbatim.
    pub birth_date: String,
    pub life_path_number: NumerologyNumber,
    pub life_path: LifePathAnalysis,
    pub expression_number: NumerologyNumber,
    pub expression: ExpressionAnalysis,
    pub soul_urge_number: NumerologyNumber,
    pub soul_urge: SoulUrgeAnalysis,
    pub personality_number: NumerologyNumber,
    pub personality: PersonalityAnalysis,
    pub birthday_number: NumerologyNumber,
    /// Looked up by raw day of month, not by `birthday_number`.
    pub birthday: BirthdayAnalysis,
    pub attitude_number: NumerologyNumber,
    pub attitude: AttitudeAnalysis,
    /// Calendar year the personal year was evaluated for.
    pub evaluated_year: i32,
    pub personal_year: NumerologyNumber,
    pub personal_year_analysis: String,
    pub birth_chart: BirthChart,
    pub life_cycles: LifeCycles,
    pub pinnacles: Pinnacles,
}

/// Digit histogram of the birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthChart {
    /// Occurrence count per digit `1..=9`; zeros are never tallied.
    pub numbers: BTreeMap<u32, u32>,
    /// Digits with zero occurrences, ascending.
    pub missing: Vec<u32>,
    /// Constant karmic debt list; independent of the date.
    pub karmic: Vec<u32>,
}

impl BirthChart {
    /// Sum of all bucket counts.
    pub fn total_count(&self) -> u32 {
        self.numbers.values().sum()
    }

    /// Occurrence count for one digit; `0` for digits outside `1..=9`.
    pub fn count_of(&self, digit: u32) -> u32 {
        self.numbers.get(&digit).copied().unwrap_or(0)
    }
}

/// Inclusive age span; `end = None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgeRange {
    pub start: u32,
    pub end: Option<u32>,
}

impl AgeRange {
    pub fn bounded(start: u32, end: u32) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn open(start: u32) -> Self {
        Self { start, end: None }
    }

    /// Returns whether `age` falls in this range.
    pub fn contains(&self, age: u32) -> bool {
        age >= self.start && self.end.map_or(true, |end| age <= end)
    }
}

impl Display for AgeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}+", self.start),
        }
    }
}

impl From<AgeRange> for String {
    fn from(value: AgeRange) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for AgeRange {
    type Error = AgeRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let label = value.trim();
        let parse = |raw: &str| {
            raw.parse::<u32>()
                .map_err(|_| AgeRangeError::InvalidLabel(value.clone()))
        };

        if let Some(start) = label.strip_suffix('+') {
            return Ok(Self::open(parse(start)?));
        }
        let (start, end) = label
            .split_once('-')
            .ok_or_else(|| AgeRangeError::InvalidLabel(value.clone()))?;
        let (start, end) = (parse(start)?, parse(end)?);
        if end < start {
            return Err(AgeRangeError::Reversed { start, end });
        }
        Ok(Self::bounded(start, end))
    }
}

/// Age label decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeRangeError {
    InvalidLabel(String),
    Reversed { start: u32, end: u32 },
}

impl Display for AgeRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLabel(value) => {
                write!(f, "age range `{value}` is invalid (expected `a-b` or `a+`)")
            }
            Self::Reversed { start, end } => {
                write!(f, "age range end ({end}) must be >= start ({start})")
            }
        }
    }
}

impl Error for AgeRangeError {}

/// One life period: its number, age span and fixed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePeriod {
    pub number: NumerologyNumber,
    pub age: AgeRange,
    pub meaning: String,
}

/// Three life cycles keyed by month, day and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycles {
    pub first: LifePeriod,
    pub second: LifePeriod,
    pub third: LifePeriod,
}

impl LifeCycles {
    /// Periods in chronological order.
    pub fn periods(&self) -> [&LifePeriod; 3] {
        [&self.first, &self.second, &self.third]
    }
}

/// Four pinnacles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pinnacles {
    pub first: LifePeriod,
    pub second: LifePeriod,
    pub third: LifePeriod,
    pub fourth: LifePeriod,
}

impl Pinnacles {
    /// Periods in chronological order.
    pub fn periods(&self) -> [&LifePeriod; 4] {
        [&self.first, &self.second, &self.third, &self.fourth]
    }
}
