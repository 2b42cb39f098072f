//! Task listing and search.

use cadence_core::constants::DEFAULT_SEARCH_LIMIT;
use cadence_rule::rule::CalendarDate;
use chrono::{Datelike, NaiveDate};

use crate::task::Task;

/// Format of a date typed into the search box.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// A parsed search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No filter.
    All,
    /// Tasks due on exactly this date.
    OnDate(CalendarDate),
    /// Case-insensitive substring of the title or comment, stored lowercased.
    Text(String),
}

impl SearchQuery {
    /// ## Summary
    /// Interprets user search text.
    ///
    /// Blank text matches everything and a `DD.MM.YYYY` date matches tasks
    /// due that day. Anything else is a text search.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::All;
        }
        match parse_search_date(text) {
            Some(date) => Self::OnDate(date),
            None => Self::Text(text.to_lowercase()),
        }
    }

    /// Whether `task` passes this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::OnDate(date) => task.date == date.to_compact_string(),
            Self::Text(needle) => {
                task.title.to_lowercase().contains(needle.as_str())
                    || task.comment.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

/// Strict `DD.MM.YYYY`: two-digit day and month, four-digit year.
fn parse_search_date(text: &str) -> Option<CalendarDate> {
    if text.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(text, SEARCH_DATE_FORMAT).ok()?;
    CalendarDate::from_ymd(date.year(), date.month(), date.day())
}

/// ## Summary
/// Filters `tasks` by `query`, orders them by date and keeps at most `limit`.
///
/// A `limit` of zero means the default of 50.
#[must_use]
pub fn list_tasks(tasks: &[Task], query: &SearchQuery, limit: usize) -> Vec<Task> {
    let limit = if limit == 0 {
        DEFAULT_SEARCH_LIMIT
    } else {
        limit
    };

    let mut found: Vec<Task> = tasks.iter().filter(|t| query.matches(t)).cloned().collect();
    // YYYYMMDD text sorts chronologically; ties keep their input order.
    found.sort_by(|a, b| a.date.cmp(&b.date));
    found.truncate(limit);

    tracing::debug!(?query, total = tasks.len(), returned = found.len(), "Listed tasks");
    found
}
