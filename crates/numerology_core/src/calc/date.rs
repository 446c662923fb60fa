//! Date-derived numbers, birth chart, life cycles and pinnacles.
//!
//! # Responsibility
//! - Derive every birth-date number from day, month and full year.
//! - Compute period age spans from the life path number.
//!
//! # Invariants
//! - Day, month and year are reduced individually (masters preserved)
//!   before any combined reduction.
//! - Period spans start at age 0, are contiguous, and end open-ended.
//! - The karmic debt list is constant and never derived from the date.

use crate::calc::reduce::reduce_number;
use crate::catalog;
use crate::model::birth_date::BirthDate;
use crate::model::number::NumerologyNumber;
use crate::model::report::{AgeRange, BirthChart, LifeCycles, LifePeriod, Pinnacles};
use std::collections::BTreeMap;

/// Karmic debt numbers listed on every birth chart.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Base age from which the first period end is derived (`36 - life path`).
const PERIOD_BASE_AGE: u32 = 36;
const LIFE_CYCLE_SPAN_YEARS: u32 = 27;
const PINNACLE_SPAN_YEARS: u32 = 9;

/// A period number with its age span, before descriptive text is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    pub number: NumerologyNumber,
    pub age: AgeRange,
}

struct ReducedParts {
    day: u64,
    month: u64,
    year: u64,
}

fn reduced_parts(date: &BirthDate) -> ReducedParts {
    ReducedParts {
        day: u64::from(reduce_number(u64::from(date.day())).value()),
        month: u64::from(reduce_number(u64::from(date.month())).value()),
        year: u64::from(reduce_number(year_value(date.year())).value()),
    }
}

fn year_value(year: i32) -> u64 {
    // BirthDate guarantees year >= 1.
    u64::try_from(year).unwrap_or(0)
}

fn sum_of(number: NumerologyNumber) -> u64 {
    u64::from(number.value())
}

/// reduce(reduce(day) + reduce(month) + reduce(year)).
pub fn life_path_number(date: &BirthDate) -> NumerologyNumber {
    let parts = reduced_parts(date);
    reduce_number(parts.day + parts.month + parts.year)
}

/// reduce(day). Catalog readings use the raw day instead.
pub fn birthday_number(date: &BirthDate) -> NumerologyNumber {
    reduce_number(u64::from(date.day()))
}

/// reduce(day + month) over the unreduced day and month.
pub fn attitude_number(date: &BirthDate) -> NumerologyNumber {
    reduce_number(u64::from(date.day() + date.month()))
}

/// Life path structure with `current_year` in place of the birth year.
pub fn personal_year_number(date: &BirthDate, current_year: u32) -> NumerologyNumber {
    let parts = reduced_parts(date);
    let year = sum_of(reduce_number(u64::from(current_year)));
    reduce_number(parts.day + parts.month + year)
}

/// Tallies digits `1..=9` of the `YYYYMMDD` digit string.
pub fn birth_chart(date: &BirthDate) -> BirthChart {
    let mut numbers = (1..=9).map(|digit| (digit, 0)).collect::<BTreeMap<u32, u32>>();
    for digit in date.digit_string().chars().filter_map(|ch| ch.to_digit(10)) {
        if let Some(count) = numbers.get_mut(&digit) {
            *count += 1;
        }
    }

    let missing = numbers
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(digit, _)| *digit)
        .collect();

    BirthChart {
        numbers,
        missing,
        karmic: KARMIC_DEBT_NUMBERS.to_vec(),
    }
}

fn first_period_end(date: &BirthDate) -> u32 {
    PERIOD_BASE_AGE.saturating_sub(life_path_number(date).value())
}

/// Life cycle numbers (month, day, year) with their age spans.
pub fn life_cycle_spans(date: &BirthDate) -> [PeriodSpan; 3] {
    let first_end = first_period_end(date);
    let second_end = first_end + LIFE_CYCLE_SPAN_YEARS;

    [
        PeriodSpan {
            number: reduce_number(u64::from(date.month())),
            age: AgeRange::bounded(0, first_end),
        },
        PeriodSpan {
            number: reduce_number(u64::from(date.day())),
            age: AgeRange::bounded(first_end + 1, second_end),
        },
        PeriodSpan {
            number: reduce_number(year_value(date.year())),
            age: AgeRange::open(second_end + 1),
        },
    ]
}

/// Pinnacle numbers with their age spans.
pub fn pinnacle_spans(date: &BirthDate) -> [PeriodSpan; 4] {
    let parts = reduced_parts(date);
    let first = reduce_number(parts.month + parts.day);
    let second = reduce_number(parts.day + parts.year);
    let third = reduce_number(sum_of(first) + sum_of(second));
    let fourth = reduce_number(parts.month + parts.year);

    let first_end = first_period_end(date);
    let second_end = first_end + PINNACLE_SPAN_YEARS;
    let third_end = second_end + PINNACLE_SPAN_YEARS;

    [
        PeriodSpan {
            number: first,
            age: AgeRange::bounded(0, first_end),
        },
        PeriodSpan {
            number: second,
            age: AgeRange::bounded(first_end + 1, second_end),
        },
        PeriodSpan {
            number: third,
            age: AgeRange::bounded(second_end + 1, third_end),
        },
        PeriodSpan {
            number: fourth,
            age: AgeRange::open(third_end + 1),
        },
    ]
}

fn with_meaning(span: PeriodSpan, meaning: &str) -> LifePeriod {
    LifePeriod {
        number: span.number,
        age: span.age,
        meaning: meaning.to_string(),
    }
}

/// Life cycles with their fixed descriptions.
pub fn life_cycles(date: &BirthDate) -> LifeCycles {
    let [first, second, third] = life_cycle_spans(date);
    let [first_text, second_text, third_text] = catalog::life_cycle_meanings();
    LifeCycles {
        first: with_meaning(first, first_text),
        second: with_meaning(second, second_text),
        third: with_meaning(third, third_text),
    }
}

/// Pinnacles with their fixed descriptions.
pub fn pinnacles(date: &BirthDate) -> Pinnacles {
    let [first, second, third, fourth] = pinnacle_spans(date);
    let [first_text, second_text, third_text, fourth_text] = catalog::pinnacle_meanings();
    Pinnacles {
        first: with_meaning(first, first_text),
        second: with_meaning(second, second_text),
        third: with_meaning(third, third_text),
        fourth: with_meaning(fourth, fourth_text),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        attitude_number, birth_chart, birthday_number, life_cycle_spans, life_path_number,
        personal_year_number, pinnacle_spans, KARMIC_DEBT_NUMBERS,
    };
    use crate::model::birth_date::BirthDate;
    use crate::model::report::AgeRange;

    fn date(raw: &str) -> BirthDate {
        BirthDate::parse(raw).expect("test date should parse")
    }

    #[test]
    fn life_path_reduces_parts_individually() {
        // 15 -> 6, 5 -> 5, 1990 -> 19 -> 1; 6 + 5 + 1 = 12 -> 3
        assert_eq!(life_path_number(&date("1990-05-15")).value(), 3);
        // 5 + 5 + 1 = 11
        assert_eq!(life_path_number(&date("1990-05-05")).value(), 11);
    }

    #[test]
    fn birthday_and_attitude_numbers() {
        let birth = date("1990-05-15");
        assert_eq!(birthday_number(&birth).value(), 6);
        assert_eq!(attitude_number(&birth).value(), 2);
        assert_eq!(birthday_number(&date("1990-05-29")).value(), 11);
        // 9 + 2 = 11 stays a master number
        assert_eq!(attitude_number(&date("1990-02-09")).value(), 11);
    }

    #[test]
    fn personal_year_swaps_in_current_year() {
        let birth = date("1990-05-15");
        // 6 + 5 + (2026 -> 10 -> 1) = 12 -> 3
        assert_eq!(personal_year_number(&birth, 2026).value(), 3);
        // 6 + 5 + (2024 -> 8) = 19 -> 1
        assert_eq!(personal_year_number(&birth, 2024).value(), 1);
    }

    #[test]
    fn birth_chart_tallies_non_zero_digits() {
        let chart = birth_chart(&date("1990-05-15"));
        assert_eq!(chart.count_of(1), 2);
        assert_eq!(chart.count_of(5), 2);
        assert_eq!(chart.count_of(9), 2);
        assert_eq!(chart.total_count(), 6);
        assert_eq!(chart.missing, vec![2, 3, 4, 6, 7, 8]);
        assert_eq!(chart.karmic, KARMIC_DEBT_NUMBERS.to_vec());
        assert_eq!(chart.numbers.len(), 9);
    }

    #[test]
    fn life_cycle_spans_follow_life_path() {
        let spans = life_cycle_spans(&date("1990-05-15"));
        let numbers = spans.map(|span| span.number.value());
        assert_eq!(numbers, [5, 6, 1]);
        assert_eq!(spans[0].age, AgeRange::bounded(0, 33));
        assert_eq!(spans[1].age, AgeRange::bounded(34, 60));
        assert_eq!(spans[2].age, AgeRange::open(61));
    }

    #[test]
    fn pinnacle_spans_preserve_masters() {
        let spans = pinnacle_spans(&date("1990-05-15"));
        // m5 + d6 = 11; d6 + y1 = 7; 11 + 7 = 18 -> 9; m5 + y1 = 6
        let numbers = spans.map(|span| span.number.value());
        assert_eq!(numbers, [11, 7, 9, 6]);
        assert_eq!(spans[0].age, AgeRange::bounded(0, 33));
        assert_eq!(spans[1].age, AgeRange::bounded(34, 42));
        assert_eq!(spans[2].age, AgeRange::bounded(43, 51));
        assert_eq!(spans[3].age, AgeRange::open(52));
    }

    #[test]
    fn master_life_path_shortens_first_period() {
        let birth = date("1990-05-05");
        assert_eq!(life_cycle_spans(&birth)[0].age, AgeRange::bounded(0, 25));
        assert_eq!(pinnacle_spans(&birth)[3].age, AgeRange::open(44));
    }
}
