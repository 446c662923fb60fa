//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose report generation to Dart via FRB as a JSON envelope.
//! - Validate required inputs before they reach the engine.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - `report_json` is present exactly when `ok` is true.

use log::warn;
use numerology_core::config::{parse_year, ENV_CURRENT_YEAR};
use numerology_core::{
    build_report, core_version as core_version_inner, init_logging as init_logging_inner,
    FixedYear, SystemYear, YearSource,
};
use std::sync::OnceLock;

static YEAR_OVERRIDE: OnceLock<Option<i32>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Report generation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    /// Whether a report was produced.
    pub ok: bool,
    /// Serialized `NumerologyReport` (camelCase JSON) on success.
    pub report_json: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ReportResponse {
    fn success(report_json: String) -> Self {
        Self {
            ok: true,
            report_json: Some(report_json),
            message: "Report generated.".to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            report_json: None,
            message: message.into(),
        }
    }
}

/// Builds a numerology report for one person.
///
/// Input semantics:
/// - `full_name`, `birth_date`: required, must not be blank.
/// - `current_year`: evaluation year for the personal year; `None` uses
///   `NUMEROLOGY_CURRENT_YEAR` when set, otherwise the system clock.
///
/// # FFI contract
/// - Sync call, CPU-only, no I/O.
/// - Never panics.
/// - The name is passed through verbatim; only the date is trimmed.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_report(
    full_name: String,
    birth_date: String,
    current_year: Option<i32>,
) -> ReportResponse {
    let missing = missing_fields(&full_name, &birth_date);
    if !missing.is_empty() {
        return ReportResponse::failure(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ));
    }

    let year = resolve_year(current_year);
    let report = match build_report(&full_name, birth_date.trim(), year) {
        Ok(report) => report,
        Err(err) => return ReportResponse::failure(format!("generate_report failed: {err}")),
    };

    match serde_json::to_string(&report) {
        Ok(json) => ReportResponse::success(json),
        Err(err) => ReportResponse::failure(format!("generate_report failed: {err}")),
    }
}

fn missing_fields(full_name: &str, birth_date: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if full_name.trim().is_empty() {
        missing.push("fullName");
    }
    if birth_date.trim().is_empty() {
        missing.push("birthDate");
    }
    missing
}

fn resolve_year(current_year: Option<i32>) -> i32 {
    if let Some(year) = current_year {
        return year;
    }
    match year_override() {
        Some(year) => FixedYear(year).current_year(),
        None => SystemYear.current_year(),
    }
}

fn year_override() -> Option<i32> {
    *YEAR_OVERRIDE.get_or_init(|| {
        let raw = std::env::var(ENV_CURRENT_YEAR).ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        match parse_year(raw) {
            Ok(year) => Some(year),
            Err(err) => {
                warn!("event=year_override_ignored module=ffi status=error reason={err}");
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{core_version, generate_report, init_logging, resolve_year};
    use numerology_core::NumerologyReport;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/numerology-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn generate_report_returns_camel_case_json() {
        let response = generate_report(
            "Nguyen Van An".to_string(),
            " 1990-05-15 ".to_string(),
            Some(2026),
        );
        assert!(response.ok, "{}", response.message);

        let json = response.report_json.expect("report json on success");
        let report: NumerologyReport = serde_json::from_str(&json).expect("decodable report");
        assert_eq!(report.life_path_number.value(), 3);
        assert_eq!(report.evaluated_year, 2026);
        assert_eq!(report.birth_date, "1990-05-15");
        assert!(json.contains("\"lifePathNumber\":3"));
    }

    #[test]
    fn generate_report_requires_both_fields() {
        let response = generate_report("   ".to_string(), String::new(), Some(2026));
        assert!(!response.ok);
        assert_eq!(response.report_json, None);
        assert_eq!(
            response.message,
            "Missing required fields: fullName, birthDate"
        );

        let response = generate_report("An".to_string(), String::new(), Some(2026));
        assert_eq!(response.message, "Missing required fields: birthDate");
    }

    #[test]
    fn generate_report_surfaces_invalid_dates() {
        let response = generate_report("An".to_string(), "1990-02-30".to_string(), Some(2026));
        assert!(!response.ok);
        assert!(response.message.contains("invalid birth date"));
    }

    #[test]
    fn explicit_year_wins_over_defaults() {
        assert_eq!(resolve_year(Some(1999)), 1999);
        assert!(resolve_year(None) >= 1);
    }
}
