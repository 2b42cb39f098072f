//! Rule text parser.

use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::values::{parse_interval, parse_month_days, parse_months, parse_weekdays};
use crate::rule::core::{
    DAILY_TOKEN, MONTHLY_TOKEN, MonthlyRule, RecurrenceRule, WEEKLY_TOKEN, YEARLY_TOKEN,
};

/// ## Summary
/// Parses rule text such as `d 7`, `y`, `w 1,3` or `m 1,-1 1,7`.
///
/// The text is split on whitespace; the first field names the kind and the
/// rest are its parameters. Parsing is independent of any date.
///
/// ## Errors
/// Returns a [`ParseError`] whose kind identifies the failing check and whose
/// `field` and `token` point at the offending text.
pub fn parse_rule(text: &str) -> ParseResult<RecurrenceRule> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let Some(&kind) = fields.first() else {
        return Err(ParseError::new(ParseErrorKind::EmptyRule, None, text));
    };

    let rule = match kind {
        DAILY_TOKEN => {
            expect_fields(text, &fields, 2..=2)?;
            RecurrenceRule::Daily(parse_interval(fields[1], 1)?)
        }
        YEARLY_TOKEN => {
            expect_fields(text, &fields, 1..=1)?;
            RecurrenceRule::Yearly
        }
        WEEKLY_TOKEN => {
            expect_fields(text, &fields, 2..=2)?;
            RecurrenceRule::Weekly(parse_weekdays(fields[1], 1)?)
        }
        MONTHLY_TOKEN => {
            expect_fields(text, &fields, 2..=3)?;
            parse_monthly(&fields)?
        }
        other => {
            return Err(ParseError::at(ParseErrorKind::UnsupportedKind, 0, other));
        }
    };

    tracing::trace!(rule = %rule, input = text, "Parsed recurrence rule");
    Ok(rule)
}

/// Checks the field count for a rule kind.
///
/// Extra fields are reported at the first one that is not expected.
fn expect_fields(text: &str, fields: &[&str], expected: RangeInclusive<usize>) -> ParseResult<()> {
    if expected.contains(&fields.len()) {
        return Ok(());
    }
    let max = *expected.end();
    match fields.get(max) {
        Some(extra) => Err(ParseError::at(ParseErrorKind::InvalidFormat, max, *extra)),
        None => Err(ParseError::new(ParseErrorKind::InvalidFormat, None, text)),
    }
}

fn parse_monthly(fields: &[&str]) -> ParseResult<RecurrenceRule> {
    let days = parse_month_days(fields[1], 1)?;
    let months = fields.get(2).map(|m| parse_months(m, 2)).transpose()?;

    MonthlyRule::new(days, months)
        .map(RecurrenceRule::Monthly)
        .ok_or_else(|| ParseError::at(ParseErrorKind::UnreachableMonthDay, 1, fields[1]))
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}
