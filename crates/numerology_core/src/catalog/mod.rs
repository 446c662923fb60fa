//! Static interpretation catalog.
//!
//! # Responsibility
//! - Map every derived number to its canned reading, one table per category.
//! - Hand out owned records so reports can be decoded and re-encoded freely.
//!
//! # Invariants
//! - Tables are read-only `'static` data, sorted by key, starting at key `1`.
//! - A miss is never an error: every lookup falls back to the key `1` entry.
//! - Birthday readings are keyed by the raw day of month, not a reduced value.

mod attitude;
mod birthday;
mod expression;
mod life_path;
mod periods;
mod personality;
mod soul_urge;

use crate::calc::reduce::reduce;
use crate::model::interpretation::{
    AttitudeAnalysis, BirthdayAnalysis, ExpressionAnalysis, LifePathAnalysis, PersonalityAnalysis,
    SoulUrgeAnalysis,
};
use crate::model::number::NumerologyNumber;
use log::debug;

/// Key used when a category has no entry for the computed number.
pub const FALLBACK_KEY: u32 = 1;

pub(crate) struct LifePathEntry {
    meaning: &'static str,
    strengths: &'static [&'static str],
    challenges: &'static [&'static str],
    career: &'static [&'static str],
    relationships: &'static str,
}

pub(crate) struct ExpressionEntry {
    meaning: &'static str,
    talents: &'static [&'static str],
    purpose: &'static str,
}

pub(crate) struct SoulUrgeEntry {
    meaning: &'static str,
    desires: &'static [&'static str],
    motivation: &'static str,
}

pub(crate) struct PersonalityEntry {
    meaning: &'static str,
    impression: &'static str,
    traits: &'static [&'static str],
}

pub(crate) struct BirthdayEntry {
    meaning: &'static str,
    gift: &'static str,
}

pub(crate) struct AttitudeEntry {
    meaning: &'static str,
    outlook: &'static str,
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn lookup<T>(category: &'static str, table: &'static [(u32, T)], key: u32) -> &'static T
where
    T: 'static,
{
    if let Some((_, entry)) = table.iter().find(|(entry_key, _)| *entry_key == key) {
        return entry;
    }
    debug!(
        "event=catalog_fallback module=catalog category={category} key={key} fallback={FALLBACK_KEY}"
    );
    &table[0].1
}

/// Life path reading; keys 1-9, 11, 22, 33.
pub fn life_path(number: NumerologyNumber) -> LifePathAnalysis {
    let entry = lookup("life_path", life_path::LIFE_PATH, number.value());
    LifePathAnalysis {
        meaning: entry.meaning.to_string(),
        strengths: owned_list(entry.strengths),
        challenges: owned_list(entry.challenges),
        career: owned_list(entry.career),
        relationships: entry.relationships.to_string(),
    }
}

/// Expression reading; keys 1-9, 11, 22, 33.
pub fn expression(number: NumerologyNumber) -> ExpressionAnalysis {
    let entry = lookup("expression", expression::EXPRESSION, number.value());
    ExpressionAnalysis {
        meaning: entry.meaning.to_string(),
        talents: owned_list(entry.talents),
        purpose: entry.purpose.to_string(),
    }
}

/// Soul urge reading; keys 1-9, 11, 22, 33.
pub fn soul_urge(number: NumerologyNumber) -> SoulUrgeAnalysis {
    let entry = lookup("soul_urge", soul_urge::SOUL_URGE, number.value());
    SoulUrgeAnalysis {
        meaning: entry.meaning.to_string(),
        desires: owned_list(entry.desires),
        motivation: entry.motivation.to_string(),
    }
}

/// Personality reading; keys 1-9, 11, 22, 33.
pub fn personality(number: NumerologyNumber) -> PersonalityAnalysis {
    let entry = lookup("personality", personality::PERSONALITY, number.value());
    PersonalityAnalysis {
        meaning: entry.meaning.to_string(),
        impression: entry.impression.to_string(),
        traits: owned_list(entry.traits),
    }
}

/// Birthday reading for the raw day of month (1-31).
pub fn birthday(day_of_month: u32) -> BirthdayAnalysis {
    let entry = lookup("birthday", birthday::BIRTHDAY, day_of_month);
    BirthdayAnalysis {
        meaning: entry.meaning.to_string(),
        gift: entry.gift.to_string(),
    }
}

/// Attitude reading; keys 1-9.
///
/// The key is reduced without master preservation first, so an attitude
/// number of 11 reads as 2.
pub fn attitude(number: NumerologyNumber) -> AttitudeAnalysis {
    let key = reduce(u64::from(number.value()), false).value();
    let entry = lookup("attitude", attitude::ATTITUDE, key);
    AttitudeAnalysis {
        meaning: entry.meaning.to_string(),
        outlook: entry.outlook.to_string(),
    }
}

/// Personal year reading; keys 1-9. Master personal years fall back to key 1.
pub fn personal_year(number: NumerologyNumber) -> String {
    lookup("personal_year", periods::PERSONAL_YEAR, number.value()).to_string()
}

/// Fixed descriptions of the three life cycles, in order.
pub fn life_cycle_meanings() -> [&'static str; 3] {
    periods::LIFE_CYCLE_MEANINGS
}

/// Fixed descriptions of the four pinnacles, in order.
pub fn pinnacle_meanings() -> [&'static str; 4] {
    periods::PINNACLE_MEANINGS
}
