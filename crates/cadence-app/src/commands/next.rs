//! `cadence next`

use anyhow::Result;
use cadence_rule::rule::CalendarDate;
use cadence_service::task::next_date_for;

/// Prints the next occurrence after `now`, or after today.
pub fn run(now: Option<&str>, date: &str, repeat: &str, today: CalendarDate) -> Result<String> {
    Ok(next_date_for(now, Some(date), Some(repeat), today)?)
}
