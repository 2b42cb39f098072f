//! `cadence done`

use anyhow::Result;
use cadence_rule::rule::CalendarDate;
use cadence_service::task::{Task, complete_task};

/// Prints the completion outcome for the task JSON in `input`.
pub fn run(input: &str, today: CalendarDate) -> Result<String> {
    let task = Task::from_json(input)?;
    let completion = complete_task(&task, today)?;
    tracing::info!(id = %task.id, ?completion, "Task completed");
    Ok(serde_json::to_string(&completion)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::parse("20240126").unwrap()
    }

    #[test]
    fn done_one_off_task() {
        let out = run(r#"{"id":"3","date":"20240126","title":"Post"}"#, today()).unwrap();
        assert_eq!(out, r#"{"action":"delete"}"#);
    }

    #[test_log::test]
    fn done_recurring_task() {
        let out = run(
            r#"{"id":"4","date":"20240115","title":"Rent","repeat":"m -1"}"#,
            today(),
        )
        .unwrap();
        assert_eq!(out, r#"{"action":"reschedule","date":"20240131"}"#);
    }
}
