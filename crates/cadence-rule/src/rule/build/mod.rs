//! Canonical rule text.
//!
//! Rules render as their kind token followed by single-space separated
//! fields, with set members ascending and duplicates gone. The month field
//! of a monthly rule is left out when every month applies. Parsing the
//! output yields the same rule.

use std::fmt::{self, Write};

use crate::rule::core::{
    DailyInterval, MonthDay, MonthDaySet, MonthSet, MonthlyRule, RecurrenceRule, WeekdaySet,
};

/// Writes items separated by commas.
fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_token())?;
        match self {
            Self::Daily(interval) => write!(f, " {interval}"),
            Self::Yearly => Ok(()),
            Self::Weekly(days) => write!(f, " {days}"),
            Self::Monthly(rule) => write!(f, " {rule}"),
        }
    }
}

impl fmt::Display for DailyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Display for MonthDaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter())
    }
}

impl fmt::Display for MonthlyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())?;
        if let Some(months) = self.months() {
            write!(f, " {months}")?;
        }
        Ok(())
    }
}
