use cadence_rule::error::RuleError;
use cadence_rule::rule::{CalendarDate, next_date};
use serde::Serialize;

use super::Task;
use crate::error::{ServiceError, ServiceResult};

/// What to do with a task once it is marked done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Completion {
    /// One-off task: remove it.
    Delete,
    /// Recurring task: move it to its next occurrence.
    Reschedule { date: String },
}

/// ## Summary
/// Checks a task before it is stored and fixes up its date.
///
/// A blank date means today. A date already in the past moves to today for
/// one-off tasks, and to the next occurrence after today for recurring ones.
/// A recurring task's rule is checked even when its date stays put.
///
/// ## Errors
/// Returns `ServiceError::MissingTitle` for a blank title, or a rule error
/// for a malformed date or repeat rule.
#[tracing::instrument(skip(task), fields(title = %task.title, repeat = %task.repeat))]
pub fn normalize_task(mut task: Task, today: CalendarDate) -> ServiceResult<Task> {
    if task.title.trim().is_empty() {
        return Err(ServiceError::MissingTitle);
    }

    if task.date.trim().is_empty() {
        task.date = today.to_compact_string();
    }
    let date = CalendarDate::parse(&task.date).map_err(RuleError::from)?;

    let next = task
        .is_recurring()
        .then(|| next_date(today, &task.date, &task.repeat))
        .transpose()?;

    if today.is_after(date) {
        task.date = next.unwrap_or_else(|| today.to_compact_string());
        tracing::debug!(date = %task.date, "Moved past task date forward");
    }

    Ok(task)
}

/// ## Summary
/// Checks a task update: the task must name an existing id, then passes
/// through [`normalize_task`].
///
/// ## Errors
/// Returns `ServiceError::MissingId` for a blank id,
/// `ServiceError::InvalidId` when the id is not a positive integer, and the
/// errors of [`normalize_task`].
pub fn validate_update(task: Task, today: CalendarDate) -> ServiceResult<Task> {
    let id = task.id.trim();
    if id.is_empty() {
        return Err(ServiceError::MissingId);
    }
    match id.parse::<u64>() {
        Ok(n) if n > 0 => {}
        _ => return Err(ServiceError::InvalidId(task.id)),
    }

    normalize_task(task, today)
}

/// ## Summary
/// Decides what marking `task` done does.
///
/// ## Errors
/// Returns a rule error when a recurring task's date or rule is malformed,
/// or when its next occurrence falls outside the supported calendar.
pub fn complete_task(task: &Task, today: CalendarDate) -> ServiceResult<Completion> {
    if !task.is_recurring() {
        return Ok(Completion::Delete);
    }

    let date = next_date(today, &task.date, &task.repeat)?;
    tracing::debug!(id = %task.id, %date, "Rescheduling completed task");
    Ok(Completion::Reschedule { date })
}

/// ## Summary
/// Answers a next-date query given as optional text parameters.
///
/// `now` falls back to `today` when absent or empty.
///
/// ## Errors
/// Returns `ServiceError::MissingParameter` when `date` or `repeat` is
/// missing, and a rule error for a malformed `now`, date or rule.
pub fn next_date_for(
    now: Option<&str>,
    date: Option<&str>,
    repeat: Option<&str>,
    today: CalendarDate,
) -> ServiceResult<String> {
    let date = date
        .filter(|d| !d.is_empty())
        .ok_or(ServiceError::MissingParameter("date"))?;
    let repeat = repeat
        .filter(|r| !r.is_empty())
        .ok_or(ServiceError::MissingParameter("repeat"))?;

    let now = match now.filter(|n| !n.is_empty()) {
        Some(text) => CalendarDate::parse(text).map_err(RuleError::from)?,
        None => today,
    };

    Ok(next_date(now, date, repeat)?)
}
