//! Task scheduling driven through the JSON task shape.

use tickler_rule::rule::CalendarDate;
use tickler_service::error::ServiceError;
use tickler_service::task::{Completion, Task, TaskScheduler};

fn today() -> CalendarDate {
    CalendarDate::parse("20240126").unwrap()
}

fn task(json: &str) -> Task {
    serde_json::from_str(json).unwrap()
}

#[test_log::test]
fn prepare_then_complete_weekly_task() {
    let scheduler = TaskScheduler::default();
    let submitted = task(r#"{"id":"7","date":"20240101","title":"Standup","repeat":"w 1,4"}"#);

    let prepared = scheduler.prepare(submitted, today()).unwrap();
    // 2024-01-26 is a Friday; the next Monday is the 29th.
    assert_eq!(prepared.date, "20240129");

    let Completion::Reschedule(next) = scheduler.complete(prepared, today()).unwrap() else {
        panic!("weekly task should be rescheduled");
    };
    assert_eq!(next.date, "20240201");
    assert_eq!(
        serde_json::to_string(&next).unwrap(),
        r#"{"id":"7","date":"20240201","title":"Standup","repeat":"w 1,4"}"#
    );
}

#[test]
fn prepare_monthly_task_with_past_date() {
    let scheduler = TaskScheduler::default();
    let prepared = scheduler
        .prepare(
            task(r#"{"date":"20231115","title":"Rent","repeat":"m -1"}"#),
            today(),
        )
        .unwrap();
    assert_eq!(prepared.date, "20240131");
}

#[test]
fn prepare_keeps_comment_and_id() {
    let scheduler = TaskScheduler::default();
    let prepared = scheduler
        .prepare(
            task(r#"{"id":"3","title":"Dentist","comment":"bring card"}"#),
            today(),
        )
        .unwrap();
    assert_eq!(prepared.id, "3");
    assert_eq!(prepared.comment, "bring card");
    assert_eq!(prepared.date, "20240126");
}

#[test]
fn complete_one_off_task_removes_it() {
    let scheduler = TaskScheduler::default();
    let completion = scheduler
        .complete(task(r#"{"date":"20240126","title":"Call"}"#), today())
        .unwrap();
    assert_eq!(completion, Completion::Remove);
}

#[test]
fn complete_yearly_task_across_leap_day() {
    let scheduler = TaskScheduler::default();
    let completion = scheduler
        .complete(
            task(r#"{"date":"20240229","title":"Birthday","repeat":"y"}"#),
            CalendarDate::parse("20240229").unwrap(),
        )
        .unwrap();
    let Completion::Reschedule(next) = completion else {
        panic!("yearly task should be rescheduled");
    };
    assert_eq!(next.date, "20250228");
}

#[test]
fn invalid_rule_is_reported_with_its_token() {
    let scheduler = TaskScheduler::default();
    let err = scheduler
        .prepare(
            task(r#"{"date":"20240126","title":"Gym","repeat":"w 1,9"}"#),
            today(),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::RuleError(_)));
    assert_eq!(err.to_string(), "Invalid rule: invalid weekday: `9`");
}

#[test]
fn next_date_matches_engine() {
    let scheduler = TaskScheduler::default();
    let next = scheduler
        .next_date(Some("20240201"), "20240101", "m -1", today())
        .unwrap();
    assert_eq!(next, CalendarDate::parse("20240229").ok());
}
