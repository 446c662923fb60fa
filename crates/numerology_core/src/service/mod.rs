//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate calculators and catalog lookups into the report use-case.
//! - Keep FFI/CLI layers decoupled from calculation details.

pub mod report_service;
