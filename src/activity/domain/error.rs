//! Error types for activity domain validation.

use thiserror::Error;

/// Errors returned while constructing activity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// The activity identifier is empty after trimming.
    #[error("activity identifier must not be empty")]
    EmptyActivityId,

    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,
}
