//! Report assembly use-case.
//!
//! # Responsibility
//! - Compute every derived number and look up every reading for one
//!   `(full name, birth date)` pair.
//! - Resolve the evaluation year through an injected `YearSource`.
//!
//! # Invariants
//! - A report is either fully populated or not produced at all.
//! - Output depends only on `(full_name, birth_date, current_year)`.
//! - Names and birth dates never reach log output.

use crate::calc::date::{
    attitude_number, birth_chart, birthday_number, life_cycles, life_path_number,
    personal_year_number, pinnacles,
};
use crate::calc::name::{expression_number, personality_number, soul_urge_number};
use crate::catalog;
use crate::model::birth_date::{BirthDate, BirthDateError};
use crate::model::report::NumerologyReport;
use chrono::{Datelike, Local};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that abort report assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Birth date input failed validation.
    InvalidBirthDate(BirthDateError),
    /// Evaluation year is before 1 CE.
    InvalidCurrentYear(i32),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthDate(err) => write!(f, "invalid birth date: {err}"),
            Self::InvalidCurrentYear(year) => {
                write!(f, "current year {year} is out of range (must be >= 1)")
            }
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBirthDate(err) => Some(err),
            Self::InvalidCurrentYear(_) => None,
        }
    }
}

impl From<BirthDateError> for ReportError {
    fn from(value: BirthDateError) -> Self {
        Self::InvalidBirthDate(value)
    }
}

/// Source of the calendar year used for personal-year readings.
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// Reads the local calendar year from the system clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemYear;

impl YearSource for SystemYear {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year. Used by tests and pinned deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<Y: YearSource + ?Sized> YearSource for &Y {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

/// Use-case service wrapper around [`build_report`].
pub struct ReportService<Y: YearSource> {
    years: Y,
}

impl<Y: YearSource> ReportService<Y> {
    /// Creates a service using the provided year source.
    pub fn new(years: Y) -> Self {
        Self { years }
    }

    /// Builds a report, resolving the evaluation year once for this call.
    pub fn build_report(&self, full_name: &str, birth_date: &str) -> ReportResult<NumerologyReport> {
        build_report(full_name, birth_date, self.years.current_year())
    }
}

/// Builds the complete report for one person.
///
/// # Errors
/// - `InvalidBirthDate` when `birth_date` does not parse to a real date.
/// - `InvalidCurrentYear` when `current_year < 1`.
///
/// A name without any accepted letter is not an error; its name numbers
/// are the degenerate `0` and read as the key-1 entries.
pub fn build_report(
    full_name: &str,
    birth_date: &str,
    current_year: i32,
) -> ReportResult<NumerologyReport> {
    let date = BirthDate::parse(birth_date)?;
    let evaluation_year =
        u32::try_from(current_year).map_err(|_| ReportError::InvalidCurrentYear(current_year))?;
    if evaluation_year == 0 {
        return Err(ReportError::InvalidCurrentYear(current_year));
    }

    let life_path_number = life_path_number(&date);
    let expression_number = expression_number(full_name);
    let soul_urge_number = soul_urge_number(full_name);
    let personality_number = personality_number(full_name);
    let birthday_number = birthday_number(&date);
    let attitude_number = attitude_number(&date);
    let personal_year = personal_year_number(&date, evaluation_year);

    debug!(
        "event=report_numbers module=report life_path={} expression={} soul_urge={} personality={} birthday={} attitude={} personal_year={}",
        life_path_number,
        expression_number,
        soul_urge_number,
        personality_number,
        birthday_number,
        attitude_number,
        personal_year
    );

    let report = NumerologyReport {
        full_name: full_name.to_string(),
        birth_date: birth_date.to_string(),
        life_path_number,
        life_path: catalog::life_path(life_path_number),
        expression_number,
        expression: catalog::expression(expression_number),
        soul_urge_number,
        soul_urge: catalog::soul_urge(soul_urge_number),
        personality_number,
        personality: catalog::personality(personality_number),
        birthday_number,
        birthday: catalog::birthday(date.day()),
        attitude_number,
        attitude: catalog::attitude(attitude_number),
        evaluated_year: current_year,
        personal_year,
        personal_year_analysis: catalog::personal_year(personal_year),
        birth_chart: birth_chart(&date),
        life_cycles: life_cycles(&date),
        pinnacles: pinnacles(&date),
    };

    info!(
        "event=report_built module=report status=ok life_path={} evaluated_year={} missing_digits={}",
        report.life_path_number,
        report.evaluated_year,
        report.birth_chart.missing.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::{build_report, FixedYear, ReportError, ReportService, SystemYear, YearSource};
    use crate::model::birth_date::BirthDateError;

    #[test]
    fn fixed_year_source_is_used_by_service() {
        let service = ReportService::new(FixedYear(2026));
        let report = service.build_report("Nguyen Van An", "1990-05-15").unwrap();
        assert_eq!(report.evaluated_year, 2026);
        assert_eq!(report.personal_year.value(), 3);
    }

    #[test]
    fn service_accepts_borrowed_year_source() {
        let years = FixedYear(2024);
        let service = ReportService::new(&years);
        let report = service.build_report("Nguyen Van An", "1990-05-15").unwrap();
        assert_eq!(report.personal_year.value(), 1);
    }

    #[test]
    fn system_year_is_a_plausible_calendar_year() {
        assert!(SystemYear.current_year() >= 2024);
    }

    #[test]
    fn rejects_invalid_birth_date_without_partial_report() {
        let err = build_report("Nguyen Van An", "1990-02-30", 2026).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidBirthDate(BirthDateError::Unparseable(_))
        ));
        assert_eq!(
            build_report("Nguyen Van An", "", 2026).unwrap_err(),
            ReportError::InvalidBirthDate(BirthDateError::Empty)
        );
    }

    #[test]
    fn rejects_non_positive_current_year() {
        assert_eq!(
            build_report("Nguyen Van An", "1990-05-15", 0).unwrap_err(),
            ReportError::InvalidCurrentYear(0)
        );
        assert_eq!(
            build_report("Nguyen Van An", "1990-05-15", -5).unwrap_err(),
            ReportError::InvalidCurrentYear(-5)
        );
    }

    #[test]
    fn error_messages_name_the_failing_input() {
        let err = build_report("A", "not-a-date", 2026).unwrap_err();
        assert!(err.to_string().starts_with("invalid birth date"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
