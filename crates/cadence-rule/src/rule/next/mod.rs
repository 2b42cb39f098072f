//! Next occurrence calculation.
//!
//! Given a rule, the anchor (start) date and a reference date ("now"), find
//! the earliest date strictly after now on which the rule fires. Every
//! computation here is pure and bounded by the supported calendar range.

mod monthly;

pub use monthly::month_candidates;

use crate::error::{RuleError, RuleResult};
use crate::rule::core::{DailyInterval, RecurrenceRule, WeekdaySet};
use crate::rule::date::CalendarDate;
use crate::rule::parse::parse_rule;

/// ## Summary
/// Computes the next occurrence of `rule` strictly after `now`, anchored at `start`.
///
/// ## Errors
/// Returns `RuleError::DateOutOfRange` when the occurrence would fall after
/// 9999-12-31.
pub fn next_occurrence(
    rule: &RecurrenceRule,
    start: CalendarDate,
    now: CalendarDate,
) -> RuleResult<CalendarDate> {
    tracing::trace!(rule = %rule, %start, %now, "Computing next occurrence");

    let next = match rule {
        RecurrenceRule::Daily(interval) => next_daily(*interval, start, now),
        RecurrenceRule::Yearly => next_yearly(start, now),
        RecurrenceRule::Weekly(days) => next_weekly(*days, start, now),
        RecurrenceRule::Monthly(monthly) => monthly::next_monthly(monthly, start, now),
    }?;

    tracing::debug!(rule = %rule, %start, %now, %next, "Computed next occurrence");
    Ok(next)
}

impl RecurrenceRule {
    /// ## Summary
    /// Method form of [`next_occurrence`].
    ///
    /// ## Errors
    /// See [`next_occurrence`].
    pub fn next_after(&self, start: CalendarDate, now: CalendarDate) -> RuleResult<CalendarDate> {
        next_occurrence(self, start, now)
    }
}

/// ## Summary
/// Computes the next occurrence from boundary strings.
///
/// `start` is a `YYYYMMDD` date and `rule` is rule text; the result is a
/// `YYYYMMDD` date. The rule is validated before the date.
///
/// ## Errors
/// Returns the parse error for a malformed rule or date, or
/// `RuleError::DateOutOfRange`.
pub fn next_date(now: CalendarDate, start: &str, rule: &str) -> RuleResult<String> {
    let rule = parse_rule(rule)?;
    let start = CalendarDate::parse(start)?;
    Ok(next_occurrence(&rule, start, now)?.to_compact_string())
}

/// First day a weekly or monthly rule may fire on: the day after both the
/// start date and now.
fn earliest(start: CalendarDate, now: CalendarDate) -> RuleResult<CalendarDate> {
    let after_start = start
        .checked_add_days(1)
        .ok_or(RuleError::DateOutOfRange(now))?;
    let after_now = now
        .checked_add_days(1)
        .ok_or(RuleError::DateOutOfRange(now))?;
    Ok(CalendarDate::later(after_start, after_now))
}

/// `start + k * interval` for the smallest `k >= 1` that lands after `now`.
fn next_daily(
    interval: DailyInterval,
    start: CalendarDate,
    now: CalendarDate,
) -> RuleResult<CalendarDate> {
    let step = u64::from(interval.days());
    let out_of_range = || RuleError::DateOutOfRange(now);

    let first = start.checked_add_days(step).ok_or_else(out_of_range)?;
    if first.is_after(now) {
        return Ok(first);
    }

    // Skip every whole step that still lands on or before now.
    let behind = u64::try_from(now.days_since(first)).unwrap_or(0);
    let steps = behind / step + 1;
    first
        .checked_add_days(steps * step)
        .ok_or_else(out_of_range)
}

/// Adds whole years to `start` until the date is after `now`.
///
/// A February 29 start turns into March 1 at the first non-leap year and
/// stays there.
fn next_yearly(start: CalendarDate, now: CalendarDate) -> RuleResult<CalendarDate> {
    let out_of_range = || RuleError::DateOutOfRange(now);

    let mut date = start.add_one_year().ok_or_else(out_of_range)?;
    while !date.is_after(now) {
        date = date.add_one_year().ok_or_else(out_of_range)?;
    }
    Ok(date)
}

/// Scans forward from the earliest allowed day for a listed weekday.
fn next_weekly(
    days: WeekdaySet,
    start: CalendarDate,
    now: CalendarDate,
) -> RuleResult<CalendarDate> {
    let mut date = earliest(start, now)?;

    // Any seven consecutive days cover the whole week.
    for _ in 0..7 {
        if days.contains(date.weekday_number()) {
            return Ok(date);
        }
        date = date
            .checked_add_days(1)
            .ok_or(RuleError::DateOutOfRange(now))?;
    }

    Err(RuleError::InvariantViolation("weekday set is empty"))
}
