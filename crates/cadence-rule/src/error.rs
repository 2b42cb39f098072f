use thiserror::Error;

use crate::rule::date::CalendarDate;
use crate::rule::parse::{ParseError, ParseErrorKind};

/// Recurrence engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Date out of range: no occurrence after {0} fits in the supported calendar")]
    DateOutOfRange(CalendarDate),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

impl RuleError {
    /// The machine-checkable parse kind, if this error came from parsing.
    #[must_use]
    pub const fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Parse(err) => Some(err.kind),
            Self::DateOutOfRange(_) | Self::InvariantViolation(_) => None,
        }
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
