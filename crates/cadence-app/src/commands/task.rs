//! `cadence task`

use anyhow::Result;
use cadence_rule::rule::CalendarDate;
use cadence_service::task::{Task, normalize_task, validate_update};

/// Validates the task JSON in `input` and prints it normalized.
pub fn run(input: &str, update: bool, today: CalendarDate) -> Result<String> {
    let task = Task::from_json(input)?;
    let task = if update {
        validate_update(task, today)?
    } else {
        normalize_task(task, today)?
    };
    Ok(serde_json::to_string(&task)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::parse("20240126").unwrap()
    }

    #[test]
    fn task_past_date_moves_to_next_occurrence() {
        let out = run(
            r#"{"date":"20240101","title":"Water plants","repeat":"w 2,6"}"#,
            false,
            today(),
        )
        .unwrap();
        let task: Task = serde_json::from_str(&out).unwrap();
        assert_eq!(task.date, "20240127");
        assert_eq!(task.title, "Water plants");
    }

    #[test]
    fn task_update_requires_id() {
        let input = r#"{"date":"20240301","title":"Water plants"}"#;
        assert!(run(input, false, today()).is_ok());
        let err = run(input, true, today()).unwrap_err();
        assert!(err.to_string().contains("id"), "{err}");
    }
}
