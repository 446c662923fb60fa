//! Pythagorean numerology engine.
//! This crate is the single source of truth for every derived number and
//! reading; renderers and transports only consume its `NumerologyReport`.

pub mod calc;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use calc::date::{
    attitude_number, birth_chart, birthday_number, life_cycle_spans, life_cycles,
    life_path_number, personal_year_number, pinnacle_spans, pinnacles, PeriodSpan,
    KARMIC_DEBT_NUMBERS,
};
pub use calc::letters::{is_accepted, is_consonant, is_vowel, value_of};
pub use calc::name::{
    clean_name, expression_number, from_name, name_number, personality_number, soul_urge_number,
    LetterFilter,
};
pub use calc::reduce::{digit_sum, reduce, reduce_number};
pub use config::{ConfigError, ConfiguredYear, EngineConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::birth_date::{BirthDate, BirthDateError};
pub use model::interpretation::{
    AttitudeAnalysis, BirthdayAnalysis, ExpressionAnalysis, LifePathAnalysis, PersonalityAnalysis,
    SoulUrgeAnalysis,
};
pub use model::number::{NumberError, NumerologyNumber, MASTER_NUMBERS};
pub use model::report::{
    AgeRange, AgeRangeError, BirthChart, LifeCycles, LifePeriod, NumerologyReport, Pinnacles,
};
pub use service::report_service::{
    build_report, FixedYear, ReportError, ReportResult, ReportService, SystemYear, YearSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
