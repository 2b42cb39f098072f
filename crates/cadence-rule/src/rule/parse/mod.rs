//! Recurrence rule parsing.
//!
//! This module provides parsers for rule text:
//! - Parser: field splitting and kind dispatch
//! - Values: comma-separated weekday, month day and month lists

mod error;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::parse_rule;
pub use values::{parse_interval, parse_month_days, parse_months, parse_weekdays};
