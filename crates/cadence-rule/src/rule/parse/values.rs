//! Value parsers for rule fields.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rule::core::{DailyInterval, MonthDay, MonthDaySet, MonthSet, WeekdaySet};

/// Error kinds reported for one kind of comma-separated list.
struct ListKinds {
    empty_list: ParseErrorKind,
    empty_item: ParseErrorKind,
    invalid: ParseErrorKind,
    out_of_range: ParseErrorKind,
}

const WEEKDAYS: ListKinds = ListKinds {
    empty_list: ParseErrorKind::EmptyWeekdayList,
    empty_item: ParseErrorKind::EmptyWeekday,
    invalid: ParseErrorKind::InvalidWeekday,
    out_of_range: ParseErrorKind::WeekdayOutOfRange,
};

const MONTH_DAYS: ListKinds = ListKinds {
    empty_list: ParseErrorKind::EmptyMonthDayList,
    empty_item: ParseErrorKind::EmptyMonthDay,
    invalid: ParseErrorKind::InvalidMonthDay,
    out_of_range: ParseErrorKind::MonthDayOutOfRange,
};

const MONTHS: ListKinds = ListKinds {
    empty_list: ParseErrorKind::EmptyMonthList,
    empty_item: ParseErrorKind::EmptyMonth,
    invalid: ParseErrorKind::InvalidMonth,
    out_of_range: ParseErrorKind::MonthOutOfRange,
};

/// Parses a comma-separated list of integers, checking each against `accept`.
fn parse_list(
    value: &str,
    field: usize,
    kinds: &ListKinds,
    accept: impl Fn(i64) -> bool,
) -> ParseResult<Vec<i64>> {
    if value.trim().is_empty() {
        return Err(ParseError::at(kinds.empty_list, field, value));
    }

    value
        .split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return Err(ParseError::at(kinds.empty_item, field, value));
            }
            let n = item
                .parse::<i64>()
                .map_err(|_e| ParseError::at(kinds.invalid, field, item))?;
            if accept(n) {
                Ok(n)
            } else {
                Err(ParseError::at(kinds.out_of_range, field, item))
            }
        })
        .collect()
}

/// Narrows values that already passed a small range check.
fn small(numbers: Vec<i64>) -> Vec<u8> {
    numbers
        .into_iter()
        .filter_map(|n| u8::try_from(n).ok())
        .collect()
}

/// Parses the interval of a daily rule (`1..=400`).
///
/// ## Errors
/// Returns `InvalidInterval` for non-numeric or out-of-range text.
pub fn parse_interval(value: &str, field: usize) -> ParseResult<DailyInterval> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|n| u16::try_from(n).ok())
        .and_then(DailyInterval::new)
        .ok_or_else(|| ParseError::at(ParseErrorKind::InvalidInterval, field, value))
}

/// Parses a weekday list such as `1,3,5` (1 = Monday, 7 = Sunday).
///
/// ## Errors
/// Returns a weekday error kind for an empty list, an empty item, a
/// non-numeric item or a number outside `1..=7`.
pub fn parse_weekdays(value: &str, field: usize) -> ParseResult<WeekdaySet> {
    let numbers = small(parse_list(value, field, &WEEKDAYS, |n| (1..=7).contains(&n))?);
    WeekdaySet::from_numbers(&numbers)
        .ok_or_else(|| ParseError::at(ParseErrorKind::EmptyWeekdayList, field, value))
}

/// Parses a month day list such as `1,15,-1`.
///
/// Days are `1..=31`, or `-1` / `-2` for the last and second-to-last day.
///
/// ## Errors
/// Returns a month day error kind for an empty list, an empty item, a
/// non-numeric item or any other number (0 included).
pub fn parse_month_days(value: &str, field: usize) -> ParseResult<MonthDaySet> {
    let days = parse_list(value, field, &MONTH_DAYS, |n| MonthDay::from_number(n).is_some())?;
    MonthDaySet::new(days.into_iter().filter_map(MonthDay::from_number))
        .ok_or_else(|| ParseError::at(ParseErrorKind::EmptyMonthDayList, field, value))
}

/// Parses a month list such as `1,6,12`.
///
/// ## Errors
/// Returns a month error kind for an empty list, an empty item, a
/// non-numeric item or a number outside `1..=12`.
pub fn parse_months(value: &str, field: usize) -> ParseResult<MonthSet> {
    let numbers = small(parse_list(value, field, &MONTHS, |n| (1..=12).contains(&n))?);
    MonthSet::from_numbers(&numbers)
        .ok_or_else(|| ParseError::at(ParseErrorKind::EmptyMonthList, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind<T: std::fmt::Debug>(result: ParseResult<T>) -> ParseErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn parse_interval_bounds() {
        assert_eq!(parse_interval("1", 1).unwrap().days(), 1);
        assert_eq!(parse_interval("400", 1).unwrap().days(), 400);
        assert_eq!(parse_interval("+7", 1).unwrap().days(), 7);
        for bad in ["0", "401", "-1", "x", "", "1.5", "99999999999999999999"] {
            assert_eq!(
                kind(parse_interval(bad, 1)),
                ParseErrorKind::InvalidInterval,
                "{bad:?}"
            );
        }
    }

    #[test]
    fn parse_weekdays_basic() {
        let set = parse_weekdays("7,1,1", 1).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 7]);
    }

    #[test]
    fn parse_weekdays_errors() {
        assert_eq!(kind(parse_weekdays("", 1)), ParseErrorKind::EmptyWeekdayList);
        assert_eq!(kind(parse_weekdays("1,", 1)), ParseErrorKind::EmptyWeekday);
        assert_eq!(kind(parse_weekdays(",1", 1)), ParseErrorKind::EmptyWeekday);
        assert_eq!(kind(parse_weekdays("1,,2", 1)), ParseErrorKind::EmptyWeekday);
        assert_eq!(kind(parse_weekdays("mo", 1)), ParseErrorKind::InvalidWeekday);
        assert_eq!(kind(parse_weekdays("0", 1)), ParseErrorKind::WeekdayOutOfRange);
        assert_eq!(kind(parse_weekdays("1,8", 1)), ParseErrorKind::WeekdayOutOfRange);
    }

    #[test]
    fn parse_weekdays_error_points_at_item() {
        let err = parse_weekdays("1,9,3", 1).unwrap_err();
        assert_eq!(err.field, Some(1));
        assert_eq!(err.token, "9");
    }

    #[test]
    fn parse_month_days_sentinels() {
        let set = parse_month_days("-2,15,-1,15", 1).unwrap();
        let numbers: Vec<i8> = set.iter().map(MonthDay::number).collect();
        assert_eq!(numbers, vec![15, -1, -2]);
    }

    #[test]
    fn parse_month_days_errors() {
        assert_eq!(kind(parse_month_days("0", 1)), ParseErrorKind::MonthDayOutOfRange);
        assert_eq!(kind(parse_month_days("-3", 1)), ParseErrorKind::MonthDayOutOfRange);
        assert_eq!(kind(parse_month_days("32", 1)), ParseErrorKind::MonthDayOutOfRange);
        assert_eq!(kind(parse_month_days("last", 1)), ParseErrorKind::InvalidMonthDay);
        assert_eq!(kind(parse_month_days("1,", 1)), ParseErrorKind::EmptyMonthDay);
        assert_eq!(kind(parse_month_days(" ", 1)), ParseErrorKind::EmptyMonthDayList);
    }

    #[test]
    fn parse_months_errors() {
        assert_eq!(parse_months("12,1", 2).unwrap().len(), 2);
        assert_eq!(kind(parse_months("13", 2)), ParseErrorKind::MonthOutOfRange);
        assert_eq!(kind(parse_months("0", 2)), ParseErrorKind::MonthOutOfRange);
        assert_eq!(kind(parse_months("jan", 2)), ParseErrorKind::InvalidMonth);
        assert_eq!(kind(parse_months("1,,2", 2)), ParseErrorKind::EmptyMonth);
        assert_eq!(kind(parse_months("", 2)), ParseErrorKind::EmptyMonthList);
    }
}
