//! Serialisable task view returned to callers.

use super::{Task, TaskDetails, TaskId, TaskKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flat summary of a task as exposed by the facade.
///
/// `priority` is present only for priority tasks and `deadline` only for
/// deadline tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task kind tag.
    pub kind: TaskKind,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Priority level of a priority task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Due timestamp of a deadline task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        let (priority, deadline) = match *task.details() {
            TaskDetails::Simple => (None, None),
            TaskDetails::Priority { priority } => (Some(priority.value()), None),
            TaskDetails::Deadline { due_at } => (None, Some(due_at)),
        };

        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            kind: task.kind(),
            done: task.is_done(),
            created_at: task.created_at(),
            priority,
            deadline,
        }
    }
}
