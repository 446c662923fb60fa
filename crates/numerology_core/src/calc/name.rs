//! Name-derived numbers: expression, soul urge and personality.
//!
//! # Responsibility
//! - Clean a full name down to the accepted alphabet.
//! - Sum letter values under a vowel/consonant filter and reduce the sum.
//!
//! # Invariants
//! - Cleaning upper-cases first, then drops every unaccepted character.
//! - A name with no counted letters reduces to the degenerate `0`.

use crate::calc::letters::{is_vowel, value_of, vietnamese_letters};
use crate::calc::reduce::reduce_number;
use crate::model::number::NumerologyNumber;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static UNACCEPTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^A-Z{}]", vietnamese_letters())).expect("valid name filter regex")
});

/// Which letters of the name contribute to the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterFilter {
    /// Every accepted letter (expression number).
    #[default]
    All,
    /// Vowels only (soul urge number).
    Vowels,
    /// Consonants only (personality number).
    Consonants,
}

impl LetterFilter {
    /// Resolves boolean flags into a filter.
    ///
    /// When both flags are set, consonant-only filtering wins.
    pub fn from_flags(only_vowels: bool, only_consonants: bool) -> Self {
        match (only_vowels, only_consonants) {
            (_, true) => Self::Consonants,
            (true, false) => Self::Vowels,
            (false, false) => Self::All,
        }
    }

    fn admits(self, ch: char) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(ch),
            Self::Consonants => !is_vowel(ch),
        }
    }
}

/// Upper-cases `name` and strips every character outside the accepted
/// alphabet (spaces, punctuation, digits, unsupported letters).
pub fn clean_name(name: &str) -> String {
    UNACCEPTED_RE
        .replace_all(&name.to_uppercase(), "")
        .into_owned()
}

/// Flag-based entry point; see [`LetterFilter::from_flags`] for the tie-break.
pub fn from_name(name: &str, only_vowels: bool, only_consonants: bool) -> NumerologyNumber {
    name_number(name, LetterFilter::from_flags(only_vowels, only_consonants))
}

/// Sums the values of the letters admitted by `filter` and reduces the sum
/// with master numbers preserved.
pub fn name_number(name: &str, filter: LetterFilter) -> NumerologyNumber {
    let cleaned = clean_name(name);
    let sum: u64 = cleaned
        .chars()
        .filter(|ch| filter.admits(*ch))
        .map(|ch| u64::from(value_of(ch)))
        .sum();

    if cleaned.is_empty() {
        warn!("event=name_unmapped module=name status=degenerate filter={filter:?}");
    } else if sum == 0 {
        debug!(
            "event=name_filter_empty module=name status=degenerate filter={filter:?} letters={}",
            cleaned.chars().count()
        );
    }

    reduce_number(sum)
}

/// Number of the full name, every letter counted.
pub fn expression_number(name: &str) -> NumerologyNumber {
    name_number(name, LetterFilter::All)
}

/// Number of the vowels of the name.
pub fn soul_urge_number(name: &str) -> NumerologyNumber {
    name_number(name, LetterFilter::Vowels)
}

/// Number of the consonants of the name.
pub fn personality_number(name: &str) -> NumerologyNumber {
    name_number(name, LetterFilter::Consonants)
}

#[cfg(test)]
mod tests {
    use super::{
        clean_name, expression_number, from_name, personality_number, soul_urge_number,
        LetterFilter,
    };

    #[test]
    fn clean_name_drops_unaccepted_characters() {
        assert_eq!(clean_name("Nguyễn Văn-An 3rd!"), "NGUYỄNVĂNANRD");
        assert_eq!(clean_name("  .,;  "), "");
    }

    #[test]
    fn nine_value_one_letters_reduce_to_nine() {
        assert_eq!(from_name("AAAAAAAAA", false, false).value(), 9);
    }

    #[test]
    fn empty_name_is_degenerate_zero() {
        assert_eq!(from_name("", false, false).value(), 0);
        assert_eq!(expression_number("123 -- !!").value(), 0);
        assert!(!expression_number("").is_canonical());
    }

    #[test]
    fn vowels_and_consonants_split_the_name() {
        // N5 G7 U3 Y7 E5 N5 V4 A1 N5 A1 N5 = 48; vowels 17, consonants 31.
        assert_eq!(expression_number("Nguyen Van An").value(), 3);
        assert_eq!(soul_urge_number("Nguyen Van An").value(), 8);
        assert_eq!(personality_number("Nguyen Van An").value(), 4);
    }

    #[test]
    fn diacritics_match_base_letters() {
        assert_eq!(
            expression_number("Nguyễn Văn An"),
            expression_number("Nguyen Van An")
        );
        assert_eq!(
            soul_urge_number("Trần Thị Hồng Đào"),
            soul_urge_number("Tran Thi Hong Dao")
        );
        assert_eq!(
            personality_number("Trần Thị Hồng Đào"),
            personality_number("Tran Thi Hong Dao")
        );
    }

    #[test]
    fn consonant_filter_wins_when_both_flags_are_set() {
        assert_eq!(LetterFilter::from_flags(true, true), LetterFilter::Consonants);
        assert_eq!(
            from_name("Nguyen Van An", true, true),
            personality_number("Nguyen Van An")
        );
    }

    #[test]
    fn master_sums_are_preserved() {
        // K2 + I9 = 11
        assert_eq!(expression_number("Ki").value(), 11);
    }
}
