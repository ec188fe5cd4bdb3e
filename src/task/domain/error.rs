//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A required request field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A request parameter could not be read as the expected type.
    #[error("parameter '{name}' has malformed value {value}, expected {expected}")]
    MalformedParameter {
        /// Parameter name as it appears in the request payload.
        name: String,
        /// Rendered offending value.
        value: String,
        /// Human description of the accepted type.
        expected: &'static str,
    },

    /// The priority level lies outside the accepted range.
    #[error("invalid priority {0}, expected an integer between 1 and 5")]
    PriorityOutOfRange(i64),

    /// The deadline offset lies outside the accepted range.
    #[error("invalid deadline offset {0} minutes, expected 0 to 525600")]
    DeadlineOffsetOutOfRange(i64),
}

/// Error returned when a task type tag is not one of the supported kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskKindError(pub String);
