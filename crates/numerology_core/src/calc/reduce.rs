//! Iterative digit-sum reduction with master-number preservation.

use crate::model::number::{NumerologyNumber, MASTER_NUMBERS};

/// Reduces `value` to a single digit.
///
/// While the value is above 9 it is replaced by its decimal digit sum. When
/// `preserve_master` is set, 11, 22 and 33 stop the loop and are returned
/// as is. Values `0..=9` come back unchanged, `0` included.
pub fn reduce(value: u64, preserve_master: bool) -> NumerologyNumber {
    let mut current = value;
    while current > 9 {
        if preserve_master && is_master(current) {
            break;
        }
        current = digit_sum(current);
    }
    // current <= 33 here, so the narrowing is lossless.
    NumerologyNumber::from_reduced(current as u32)
}

/// Shorthand for `reduce(value, true)`.
pub fn reduce_number(value: u64) -> NumerologyNumber {
    reduce(value, true)
}

/// Sum of the decimal digits of `value`.
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

fn is_master(value: u64) -> bool {
    MASTER_NUMBERS.iter().any(|master| u64::from(*master) == value)
}

#[cfg(test)]
mod tests {
    use super::{digit_sum, reduce, reduce_number};

    #[test]
    fn single_digits_are_returned_unchanged() {
        for value in 0..=9 {
            assert_eq!(reduce_number(value).value(), value as u32);
            assert_eq!(reduce(value, false).value(), value as u32);
        }
    }

    #[test]
    fn masters_stop_only_when_preserved() {
        assert_eq!(reduce(11, true).value(), 11);
        assert_eq!(reduce(22, true).value(), 22);
        assert_eq!(reduce(33, true).value(), 33);
        assert_eq!(reduce(11, false).value(), 2);
        assert_eq!(reduce(22, false).value(), 4);
        assert_eq!(reduce(33, false).value(), 6);
    }

    #[test]
    fn intermediate_masters_are_caught() {
        // 29 -> 11, 38 -> 11, 1993 -> 22
        assert_eq!(reduce_number(29).value(), 11);
        assert_eq!(reduce_number(38).value(), 11);
        assert_eq!(reduce_number(1993).value(), 22);
        assert_eq!(reduce(1993, false).value(), 4);
    }

    #[test]
    fn non_master_values_land_in_single_digit_range() {
        for value in 10..5_000_u64 {
            let reduced = reduce(value, false).value();
            assert!((1..=9).contains(&reduced), "{value} reduced to {reduced}");
        }
        assert_eq!(reduce(u64::MAX, true).value(), 6);
    }

    #[test]
    fn digit_sum_handles_zero_and_large_values() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(999_999), 54);
    }
}
