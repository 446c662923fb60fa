//! Pythagorean letter table with Vietnamese letters.
//!
//! # Invariants
//! - Every accepted letter maps to `1..=9`; anything else maps to `0`.
//! - Vietnamese letters share the value of their base Latin letter.
//! - `Đ` is the only accepted non-ASCII consonant.

/// Vietnamese upper-case letters grouped by the value of their base letter.
const VIETNAMESE_GROUPS: &[(&str, u32)] = &[
    ("ÁÀẢÃẠĂẮẰẲẴẶÂẤẦẨẪẬ", 1),
    ("ÉÈẺẼẸÊẾỀỂỄỆ", 5),
    ("ÍÌỈĨỊ", 9),
    ("ÓÒỎÕỌÔỐỒỔỖỘƠỚỜỞỠỢ", 6),
    ("ÚÙỦŨỤƯỨỪỬỮỰ", 3),
    ("ÝỲỶỸỴ", 7),
    ("Đ", 4),
];

const BASE_VOWELS: &str = "AEIOUY";
const VIETNAMESE_CONSONANTS: &str = "Đ";

/// Returns the numeric value of `ch`, or `0` when it is not in the table.
///
/// Lower-case input is upper-cased first.
pub fn value_of(ch: char) -> u32 {
    let ch = to_upper(ch);
    if ch.is_ascii_uppercase() {
        return (ch as u32 - 'A' as u32) % 9 + 1;
    }
    VIETNAMESE_GROUPS
        .iter()
        .find(|(letters, _)| letters.contains(ch))
        .map_or(0, |(_, value)| *value)
}

/// Returns whether `ch` is an accepted letter.
pub fn is_accepted(ch: char) -> bool {
    value_of(ch) != 0
}

/// Returns whether `ch` is an accepted vowel (A E I O U Y and their
/// Vietnamese variants).
pub fn is_vowel(ch: char) -> bool {
    let ch = to_upper(ch);
    if ch.is_ascii() {
        return BASE_VOWELS.contains(ch);
    }
    is_accepted(ch) && !VIETNAMESE_CONSONANTS.contains(ch)
}

/// Returns whether `ch` is an accepted consonant.
///
/// Unmapped characters are neither vowels nor consonants.
pub fn is_consonant(ch: char) -> bool {
    is_accepted(ch) && !is_vowel(ch)
}

/// All accepted non-ASCII letters, concatenated.
///
/// Used to build the name cleaning character class.
pub(crate) fn vietnamese_letters() -> String {
    VIETNAMESE_GROUPS
        .iter()
        .map(|(letters, _)| *letters)
        .collect()
}

fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_accepted, is_consonant, is_vowel, value_of, vietnamese_letters};

    #[test]
    fn latin_letters_follow_pythagorean_cycle() {
        let expected = [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ];
        for (letters, value) in expected {
            for ch in letters.chars() {
                assert_eq!(value_of(ch), value, "letter {ch}");
                assert_eq!(value_of(ch.to_ascii_lowercase()), value, "letter {ch}");
            }
        }
    }

    #[test]
    fn vietnamese_letters_share_base_value() {
        assert_eq!(value_of('Ắ'), value_of('A'));
        assert_eq!(value_of('ệ'), value_of('E'));
        assert_eq!(value_of('Ĩ'), value_of('I'));
        assert_eq!(value_of('Ợ'), value_of('O'));
        assert_eq!(value_of('ư'), value_of('U'));
        assert_eq!(value_of('Ỵ'), value_of('Y'));
        assert_eq!(value_of('đ'), value_of('D'));
    }

    #[test]
    fn unmapped_characters_are_skipped() {
        for ch in [' ', '-', '7', 'ß', 'Ç', 'Ñ', '山'] {
            assert_eq!(value_of(ch), 0, "char {ch}");
            assert!(!is_accepted(ch));
            assert!(!is_vowel(ch));
            assert!(!is_consonant(ch));
        }
    }

    #[test]
    fn vowel_classification_includes_y_and_excludes_d_stroke() {
        for ch in "AEIOUYÂƠỲ".chars() {
            assert!(is_vowel(ch), "vowel {ch}");
        }
        for ch in "BNĐ".chars() {
            assert!(is_consonant(ch), "consonant {ch}");
        }
    }

    #[test]
    fn every_vietnamese_letter_is_accepted() {
        let letters = vietnamese_letters();
        assert_eq!(letters.chars().count(), 67);
        assert!(letters.chars().all(is_accepted));
    }
}
