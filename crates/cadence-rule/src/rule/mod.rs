pub mod build;
pub mod core;
pub mod date;
pub mod next;
pub mod parse;

pub use self::core::{
    DailyInterval, MonthDay, MonthDaySet, MonthSet, MonthlyRule, RecurrenceRule, WeekdaySet,
};
pub use date::{CalendarDate, days_in_month};
pub use next::{month_candidates, next_date, next_occurrence};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_rule};
