use cadence_rule::rule::ParseErrorKind;

pub struct RuleCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub start: &'static str,
    pub now: &'static str,
    pub expected: Result<&'static str, ParseErrorKind>,
}

const fn ok(
    name: &'static str,
    rule: &'static str,
    start: &'static str,
    now: &'static str,
    next: &'static str,
) -> RuleCase {
    RuleCase {
        name,
        rule,
        start,
        now,
        expected: Ok(next),
    }
}

const fn fails(
    name: &'static str,
    rule: &'static str,
    start: &'static str,
    kind: ParseErrorKind,
) -> RuleCase {
    RuleCase {
        name,
        rule,
        start,
        now: "20240101",
        expected: Err(kind),
    }
}

pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        ok("daily_400", "d 400", "20240101", "20240101", "20250204"),
        ok("daily_start_after_now", "d 1", "20240101", "20231231", "20240102"),
        ok("daily_catch_up", "d 30", "20200101", "20240101", "20240110"),
        ok("yearly_plain", "y", "20230615", "20240101", "20240615"),
        ok("yearly_leap_day", "y", "20240229", "20250301", "20260301"),
        ok("weekly_mon_wed", "w 1,3", "20240101", "20240101", "20240103"),
        ok("weekly_weekend", "w 6,7", "20240101", "20240103", "20240106"),
        ok("monthly_last_leap", "m -1", "20240115", "20240228", "20240229"),
        ok("monthly_last_after_leap", "m -1", "20240115", "20240229", "20240331"),
        ok("monthly_next_month", "m 15", "20240120", "20240110", "20240215"),
        ok("monthly_first_and_last", "m 1,-1", "20240131", "20240131", "20240201"),
        ok("monthly_feb_29_only", "m 29 2", "20240101", "20240301", "20280229"),
        fails("empty", "", "20240101", ParseErrorKind::EmptyRule),
        fails("unsupported", "x 5", "20240101", ParseErrorKind::UnsupportedKind),
        fails("yearly_extra", "y 1", "20240101", ParseErrorKind::InvalidFormat),
        fails("daily_too_long", "d 401", "20240101", ParseErrorKind::InvalidInterval),
        fails("weekday_eight", "w 8", "20240101", ParseErrorKind::WeekdayOutOfRange),
        fails("weekday_gap", "w 1,,2", "20240101", ParseErrorKind::EmptyWeekday),
        fails("month_day_zero", "m 0", "20240101", ParseErrorKind::MonthDayOutOfRange),
        fails("month_thirteen", "m 1 13", "20240101", ParseErrorKind::MonthOutOfRange),
        fails("feb_31", "m 31 2", "20240101", ParseErrorKind::UnreachableMonthDay),
        fails("short_date", "d 1", "2024011", ParseErrorKind::InvalidDate),
    ]
}
