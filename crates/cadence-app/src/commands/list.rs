//! `cadence list`

use anyhow::Result;
use cadence_service::search::{SearchQuery, list_tasks};
use cadence_service::task::Task;
use serde::Serialize;

#[derive(Serialize)]
struct TaskList {
    tasks: Vec<Task>,
}

/// Prints the tasks in `input` that match `search`, at most `limit` of them.
pub fn run(input: &str, search: &str, limit: usize) -> Result<String> {
    let tasks = Task::list_from_json(input)?;
    let query = SearchQuery::parse(search);
    let tasks = list_tasks(&tasks, &query, limit);
    Ok(serde_json::to_string(&TaskList { tasks })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASKS: &str = r#"[
        {"id":"1","date":"20240301","title":"Book flights","comment":"","repeat":""},
        {"id":"2","date":"20240105","title":"Dentist","comment":"","repeat":"y"},
        {"id":"3","date":"20240105","title":"Flight check-in","comment":"","repeat":""}
    ]"#;

    fn ids(out: &str) -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(out).unwrap();
        value["tasks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn list_everything_by_date() {
        assert_eq!(ids(&run(TASKS, "", 50).unwrap()), ["2", "3", "1"]);
    }

    #[test]
    fn list_with_search() {
        assert_eq!(ids(&run(TASKS, "flight", 50).unwrap()), ["3", "1"]);
        assert_eq!(ids(&run(TASKS, "05.01.2024", 1).unwrap()), ["2"]);
    }

    #[test]
    fn list_empty_result_is_empty_array() {
        assert_eq!(run(TASKS, "nothing", 50).unwrap(), r#"{"tasks":[]}"#);
    }
}
