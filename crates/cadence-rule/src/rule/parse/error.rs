//! Rule parse error types.

use std::fmt;

/// Result type for rule and date parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a rule or a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Whitespace-separated field of the rule the error refers to (0-based).
    /// `None` when the error is about the input as a whole.
    pub field: Option<usize>,
    /// The offending text, exactly as supplied.
    pub token: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, field: Option<usize>, token: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            token: token.into(),
        }
    }

    /// Creates an error pointing at a rule field.
    #[must_use]
    pub fn at(kind: ParseErrorKind, field: usize, token: impl Into<String>) -> Self {
        Self::new(kind, Some(field), token)
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(token: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidDate, None, token)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "field {field}: {}: {:?}", self.kind, self.token),
            None => write!(f, "{}: {:?}", self.kind, self.token),
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Rule text is empty or only whitespace.
    EmptyRule,
    /// First field is not one of `d`, `y`, `w`, `m`.
    UnsupportedKind,
    /// Wrong number of fields for the rule kind.
    InvalidFormat,
    /// Daily interval is not an integer in `1..=400`.
    InvalidInterval,
    EmptyWeekdayList,
    /// A weekday list has an empty item, e.g. a trailing comma.
    EmptyWeekday,
    InvalidWeekday,
    WeekdayOutOfRange,
    EmptyMonthDayList,
    /// A month day list has an empty item.
    EmptyMonthDay,
    InvalidMonthDay,
    MonthDayOutOfRange,
    EmptyMonthList,
    /// A month list has an empty item.
    EmptyMonth,
    InvalidMonth,
    MonthOutOfRange,
    /// None of the listed days exists in any of the listed months.
    UnreachableMonthDay,
    /// Date is not an 8-digit `YYYYMMDD` calendar date.
    InvalidDate,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyRule => "repeat rule is empty",
            Self::UnsupportedKind => "unsupported repeat rule",
            Self::InvalidFormat => "invalid repeat format",
            Self::InvalidInterval => "invalid day interval",
            Self::EmptyWeekdayList => "weekday list is empty",
            Self::EmptyWeekday => "empty weekday value",
            Self::InvalidWeekday => "invalid weekday",
            Self::WeekdayOutOfRange => "weekday out of range",
            Self::EmptyMonthDayList => "month day list is empty",
            Self::EmptyMonthDay => "empty month day value",
            Self::InvalidMonthDay => "invalid month day",
            Self::MonthDayOutOfRange => "month day out of range",
            Self::EmptyMonthList => "month list is empty",
            Self::EmptyMonth => "empty month value",
            Self::InvalidMonth => "invalid month",
            Self::MonthOutOfRange => "month out of range",
            Self::UnreachableMonthDay => "month day never occurs in the listed months",
            Self::InvalidDate => "invalid date",
        })
    }
}
