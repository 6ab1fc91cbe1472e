//! Task domain model.
//!
//! # Responsibility
//! - Define the task record handed between store, facades and callers.
//!
//! # Invariants
//! - `id` is intended unique within a store; the store, not this type,
//!   enforces it (construction accepts any id).
//! - `due_date` is uninterpreted text. No parsing, no validation.

use serde::{Deserialize, Serialize};

/// Identifier for a task within one store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i32;

/// Task value record.
///
/// Field contents are accepted as-is: empty titles and malformed due-date
/// text are stored silently. Serialized field names follow the external
/// schema's camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier used for lookup and replacement.
    pub id: TaskId,
    /// Title or name of the task.
    pub title: String,
    /// Detailed description.
    pub description: String,
    /// Due date as free-form text.
    pub due_date: String,
    /// Completion flag, `false` for newly created tasks.
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    /// Creates a not-yet-completed task.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            is_completed: false,
        }
    }

    /// Returns a replacement record with the completion flag set.
    ///
    /// Tasks are value objects, so toggling completion produces a new
    /// record for the store to swap in at the same id.
    pub fn with_completion(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn new_task_defaults_to_not_completed() {
        let task = Task::new(1, "title", "desc", "2024-01-01");
        assert!(!task.is_completed);
    }

    #[test]
    fn with_completion_replaces_flag_only() {
        let task = Task::new(7, "a", "b", "c");
        let done = task.clone().with_completion(true);
        assert!(done.is_completed);
        assert_eq!(done.id, task.id);
        assert_eq!(done.title, task.title);
        assert_eq!(done.description, task.description);
        assert_eq!(done.due_date, task.due_date);
    }

    #[test]
    fn serializes_with_camel_case_schema_names() {
        let task = Task::new(3, "t", "d", "2024-06-01").with_completion(true);
        let json = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(json["id"], 3);
        assert_eq!(json["dueDate"], "2024-06-01");
        assert_eq!(json["isCompleted"], true);
    }

    #[test]
    fn deserializes_with_completion_defaulting_to_false() {
        let task: Task = serde_json::from_str(
            r#"{"id":9,"title":"t","description":"d","dueDate":"soon"}"#,
        )
        .expect("task should deserialize");
        assert!(!task.is_completed);
        assert_eq!(task.due_date, "soon");
    }
}
