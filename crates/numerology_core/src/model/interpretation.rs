//! Owned interpretation records returned by catalog lookups.
//!
//! Each derived-number category has its own record shape; personal-year
//! readings are plain strings and have no record type.

use serde::{Deserialize, Serialize};

/// Reading for the life path number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePathAnalysis {
    pub meaning: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub career: Vec<String>,
    pub relationships: String,
}

/// Reading for the expression (full name) number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionAnalysis {
    pub meaning: String,
    pub talents: Vec<String>,
    pub purpose: String,
}

/// Reading for the soul urge (vowels) number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoulUrgeAnalysis {
    pub meaning: String,
    pub desires: Vec<String>,
    pub motivation: String,
}

/// Reading for the personality (consonants) number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityAnalysis {
    pub meaning: String,
    pub impression: String,
    pub traits: Vec<String>,
}

/// Reading for the raw day of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayAnalysis {
    pub meaning: String,
    pub gift: String,
}

/// Reading for the attitude number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttitudeAnalysis {
    pub meaning: String,
    pub outlook: String,
}
