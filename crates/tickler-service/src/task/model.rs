use serde::{Deserialize, Serialize};

/// A task as submitted by clients and returned to them.
///
/// Every field is text; empty fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Scheduled date, `YYYYMMDD`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Recurrence rule text; empty for a one-off task.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repeat: String,
}

/// What happens to a task once it is marked done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One-off task: drop it.
    Remove,
    /// Recurring task: keep it with its date moved to the next occurrence.
    Reschedule(Task),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let task = Task {
            date: "20240101".to_string(),
            title: "Water plants".to_string(),
            ..Task::default()
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"date":"20240101","title":"Water plants"}"#);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let task: Task = serde_json::from_str(r#"{"title":"Call"}"#).unwrap();
        assert_eq!(task.title, "Call");
        assert!(task.date.is_empty());
        assert!(task.repeat.is_empty());
    }
}
