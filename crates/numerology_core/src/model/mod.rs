//! Value types shared by the calculators, the catalog and the report.
//!
//! # Responsibility
//! - Define typed inputs (`BirthDate`) and outputs (`NumerologyNumber`,
//!   interpretation records, `NumerologyReport`).
//! - Own the serde wire shape consumed by renderers.
//!
//! # Invariants
//! - Every type here is an immutable value; no identity, no lifecycle.

pub mod birth_date;
pub mod interpretation;
pub mod number;
pub mod report;
