use cadence_rule::rule::{CalendarDate, ParseErrorKind};

use super::*;
use crate::error::ServiceError;

fn today() -> CalendarDate {
    CalendarDate::parse("20240126").unwrap()
}

fn task(date: &str, title: &str, repeat: &str) -> Task {
    Task {
        id: String::new(),
        date: date.to_string(),
        title: title.to_string(),
        comment: String::new(),
        repeat: repeat.to_string(),
    }
}

#[test]
fn normalize_requires_title() {
    let err = normalize_task(task("20240201", "  ", ""), today()).unwrap_err();
    assert!(matches!(err, ServiceError::MissingTitle));
}

#[test]
fn normalize_blank_date_is_today() {
    let normalized = normalize_task(task("", "Shop", ""), today()).unwrap();
    assert_eq!(normalized.date, "20240126");
}

#[test]
fn normalize_rejects_malformed_date() {
    let err = normalize_task(task("2024-01-26", "Shop", ""), today()).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::InvalidDate));
}

#[test]
fn normalize_rejects_malformed_rule_even_for_future_date() {
    let err = normalize_task(task("20240301", "Shop", "k 3"), today()).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::UnsupportedKind));
}

#[test]
fn normalize_keeps_future_and_today_dates() {
    let future = normalize_task(task("20240301", "Shop", "d 3"), today()).unwrap();
    assert_eq!(future.date, "20240301");

    let due_today = normalize_task(task("20240126", "Shop", "d 3"), today()).unwrap();
    assert_eq!(due_today.date, "20240126");
}

#[test]
fn normalize_moves_past_one_off_task_to_today() {
    let normalized = normalize_task(task("20240101", "Shop", ""), today()).unwrap();
    assert_eq!(normalized.date, "20240126");
}

#[test_log::test]
fn normalize_moves_past_recurring_task_to_next_occurrence() {
    let normalized = normalize_task(task("20240120", "Gym", "d 7"), today()).unwrap();
    assert_eq!(normalized.date, "20240127");
}

#[test]
fn update_requires_positive_integer_id() {
    let mut update = task("20240301", "Shop", "");
    let err = validate_update(update.clone(), today()).unwrap_err();
    assert!(matches!(err, ServiceError::MissingId));

    for bad in ["abc", "0", "-3", "1.5"] {
        update.id = bad.to_string();
        let err = validate_update(update.clone(), today()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId(ref id) if id == bad), "{bad}");
    }

    update.id = "42".to_string();
    assert_eq!(validate_update(update.clone(), today()).unwrap(), update);
}

#[test]
fn complete_one_off_task_deletes() {
    let done = complete_task(&task("20240126", "Shop", ""), today()).unwrap();
    assert_eq!(done, Completion::Delete);
}

#[test_log::test]
fn complete_recurring_task_reschedules() {
    let done = complete_task(&task("20240126", "Gym", "w 1,3"), today()).unwrap();
    assert_eq!(
        done,
        Completion::Reschedule {
            date: "20240129".to_string()
        }
    );
}

#[test]
fn completion_serializes_with_action_tag() {
    let delete = serde_json::to_string(&Completion::Delete).unwrap();
    assert_eq!(delete, r#"{"action":"delete"}"#);

    let reschedule = serde_json::to_string(&Completion::Reschedule {
        date: "20240129".to_string(),
    })
    .unwrap();
    assert_eq!(reschedule, r#"{"action":"reschedule","date":"20240129"}"#);
}

#[test]
fn next_date_for_requires_date_and_repeat() {
    let err = next_date_for(None, None, Some("d 1"), today()).unwrap_err();
    assert!(matches!(err, ServiceError::MissingParameter("date")));

    let err = next_date_for(None, Some("20240101"), Some(""), today()).unwrap_err();
    assert!(matches!(err, ServiceError::MissingParameter("repeat")));
}

#[test]
fn next_date_for_uses_explicit_now_or_today() {
    let next = next_date_for(Some("20240101"), Some("20240101"), Some("d 5"), today()).unwrap();
    assert_eq!(next, "20240106");

    let next = next_date_for(None, Some("20240101"), Some("d 5"), today()).unwrap();
    assert_eq!(next, "20240131");
}

#[test]
fn next_date_for_rejects_malformed_now() {
    let err = next_date_for(Some("tomorrow"), Some("20240101"), Some("d 5"), today()).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::InvalidDate));
}

#[test]
fn task_json_uses_plain_field_names() {
    let parsed = Task::from_json(r#"{"date":"20240126","title":"Gym","repeat":"d 7"}"#).unwrap();
    assert_eq!(parsed, task("20240126", "Gym", "d 7"));

    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["title"], "Gym");
    assert_eq!(json["comment"], "");

    let list = Task::list_from_json(r#"[{"id":"1","title":"a"},{"id":"2","title":"b"}]"#).unwrap();
    assert_eq!(list.len(), 2);
    assert!(Task::from_json("not json").is_err());
}
