//! Domain model for task tracking.
//!
//! Tasks are a closed tagged variant: every task shares an identifier,
//! title and creation timestamp, and carries a kind-specific payload that
//! is fixed at construction.

mod attributes;
mod error;
mod ids;
mod kind;
mod summary;
mod task;

pub use attributes::{DeadlineOffset, Priority};
pub use error::{ParseTaskKindError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use kind::TaskKind;
pub use summary::TaskSummary;
pub use task::{Task, TaskDetails};
