//! Calendar dates exchanged as `YYYYMMDD`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;

use super::parse::{ParseError, ParseResult};

/// Format string for the 8-character boundary representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// A day on the proleptic Gregorian calendar, no time of day.
///
/// Only years `1..=9999` are representable so that every value renders as
/// exactly eight digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a date from its components, `None` if it does not exist or is
    /// outside the supported years.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// ## Summary
    /// Parses an 8-character `YYYYMMDD` string.
    ///
    /// No separators, signs or surrounding whitespace are accepted.
    ///
    /// ## Errors
    /// Returns an `InvalidDate` parse error if the text is not exactly eight
    /// ASCII digits naming a real date.
    pub fn parse(s: &str) -> ParseResult<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::invalid_date(s));
        }

        let year = s[0..4]
            .parse::<i32>()
            .map_err(|_e| ParseError::invalid_date(s))?;
        let month = s[4..6]
            .parse::<u32>()
            .map_err(|_e| ParseError::invalid_date(s))?;
        let day = s[6..8]
            .parse::<u32>()
            .map_err(|_e| ParseError::invalid_date(s))?;

        Self::from_ymd(year, month, day).ok_or_else(|| ParseError::invalid_date(s))
    }

    /// Today's date on the calendar of `tz`.
    #[must_use]
    pub fn today_in(tz: Tz) -> Self {
        Self(Utc::now().with_timezone(&tz).date_naive())
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Day of the week, 1 = Monday through 7 = Sunday.
    #[must_use]
    pub fn weekday_number(self) -> u8 {
        // number_from_monday is always 1..=7
        u8::try_from(self.0.weekday().number_from_monday()).unwrap_or(7)
    }

    /// Whether `self` falls on a later calendar day than `other`.
    #[must_use]
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }

    /// The later of two dates.
    #[must_use]
    pub fn later(a: Self, b: Self) -> Self {
        a.max(b)
    }

    /// Adds `days`, `None` once the result leaves the supported range.
    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .filter(|d| d.year() <= Self::MAX_YEAR)
            .map(Self)
    }

    /// Same month and day one year later.
    ///
    /// February 29 in a year without one becomes March 1, the day the
    /// overflowing date normalizes to. `None` past year 9999.
    #[must_use]
    pub fn add_one_year(self) -> Option<Self> {
        let year = self.year() + 1;
        Self::from_ymd(year, self.month(), self.day())
            .or_else(|| Self::from_ymd(year, 3, 1).filter(|_| self.month() == 2))
    }

    /// Whole days from `earlier` to `self`; negative when `self` comes first.
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// The `YYYYMMDD` form.
    #[must_use]
    pub fn to_compact_string(self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

/// Number of days in `month` of `year`, leap-year aware.
///
/// Returns 0 for a month outside `1..=12`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => u32::try_from((next - first).num_days()).unwrap_or(0),
        _ => 0,
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
