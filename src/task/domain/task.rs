//! Task entity and its kind-specific payload.

use super::{DeadlineOffset, Priority, TaskId, TaskKind, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Kind-specific task attributes.
///
/// The variant is fixed at construction and determines which optional
/// attributes of a [`Task`] are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskDetails {
    /// No extra attributes.
    Simple,
    /// Task carrying a priority level.
    Priority {
        /// Priority level.
        priority: Priority,
    },
    /// Task carrying a due timestamp.
    Deadline {
        /// Creation time plus the requested offset.
        due_at: DateTime<Utc>,
    },
}

impl TaskDetails {
    /// Returns the kind tag for these details.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self {
            Self::Simple => TaskKind::Simple,
            Self::Priority { .. } => TaskKind::Priority,
            Self::Deadline { .. } => TaskKind::Deadline,
        }
    }
}

/// A unit of trackable work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    details: TaskDetails,
    done: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a simple task.
    #[must_use]
    pub fn new_simple(title: TaskTitle, clock: &impl Clock) -> Self {
        Self::with_details(title, clock.utc(), TaskDetails::Simple)
    }

    /// Creates a priority task.
    #[must_use]
    pub fn new_priority(title: TaskTitle, priority: Priority, clock: &impl Clock) -> Self {
        Self::with_details(title, clock.utc(), TaskDetails::Priority { priority })
    }

    /// Creates a deadline task due `offset` after its creation time.
    #[must_use]
    pub fn new_deadline(title: TaskTitle, offset: DeadlineOffset, clock: &impl Clock) -> Self {
        let created_at = clock.utc();
        let due_at = created_at + offset.as_delta();
        Self::with_details(title, created_at, TaskDetails::Deadline { due_at })
    }

    fn with_details(title: TaskTitle, created_at: DateTime<Utc>, details: TaskDetails) -> Self {
        Self {
            id: TaskId::new(),
            title,
            details,
            done: false,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.details.kind()
    }

    /// Returns the kind-specific attributes.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the priority level for priority tasks.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        match self.details {
            TaskDetails::Priority { priority } => Some(priority),
            TaskDetails::Simple | TaskDetails::Deadline { .. } => None,
        }
    }

    /// Returns the due timestamp for deadline tasks.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        match self.details {
            TaskDetails::Deadline { due_at } => Some(due_at),
            TaskDetails::Simple | TaskDetails::Priority { .. } => None,
        }
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
