//! Numeric derivations: digit reduction, letter values, name and date numbers.
//!
//! # Responsibility
//! - Turn raw inputs into `NumerologyNumber` values and the birth chart.
//! - Stay free of interpretation text; the catalog owns readings.
//!
//! # Invariants
//! - Every function here is pure and allocation-light.
//! - Master numbers are preserved unless a caller opts out explicitly.

pub mod date;
pub mod letters;
pub mod name;
pub mod reduce;
