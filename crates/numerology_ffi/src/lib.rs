//! Flutter-facing bridge over `numerology_core`.

pub mod api;
