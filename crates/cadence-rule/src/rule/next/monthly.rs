//! Monthly rule scan.

use std::collections::BTreeSet;

use super::earliest;
use crate::error::{RuleError, RuleResult};
use crate::rule::core::{MonthDaySet, MonthlyRule};
use crate::rule::date::{CalendarDate, days_in_month};

/// Concrete days a day set resolves to in a month of `days_in_month` days.
///
/// Days the month does not have are dropped; the result is ascending and
/// free of duplicates (`31,-1` in a 31-day month gives one day).
#[must_use]
pub fn month_candidates(days: &MonthDaySet, days_in_month: u32) -> Vec<u32> {
    days.iter()
        .filter_map(|d| d.resolve(days_in_month))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Walks month by month from the earliest allowed day.
///
/// `MonthlyRule` guarantees some eligible month can hold a listed day, so the
/// walk finds one within a year, or within eight years when the only
/// possible day is February 29.
pub(super) fn next_monthly(
    rule: &MonthlyRule,
    start: CalendarDate,
    now: CalendarDate,
) -> RuleResult<CalendarDate> {
    let earliest = earliest(start, now)?;
    let (mut year, mut month) = (earliest.year(), earliest.month());
    // Only the month holding `earliest` starts past its first day.
    let mut floor = earliest.day();

    loop {
        if rule.can_occur_in(month) {
            let candidates = month_candidates(rule.days(), days_in_month(year, month));
            if let Some(day) = candidates.into_iter().find(|&d| d >= floor) {
                tracing::trace!(year, month, day, "Monthly candidate selected");
                return CalendarDate::from_ymd(year, month, day)
                    .ok_or(RuleError::InvariantViolation("resolved day outside its month"));
            }
        }

        floor = 1;
        (year, month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        if year > CalendarDate::MAX_YEAR {
            return Err(RuleError::DateOutOfRange(now));
        }
    }
}
