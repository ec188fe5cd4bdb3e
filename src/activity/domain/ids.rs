//! Identifiers supplied by the hosting learning platform.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External activity instance identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ActivityId(String);

impl ActivityId {
    /// Creates a validated activity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::EmptyActivityId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ActivityDomainError> {
        non_empty(value.into())
            .map(Self)
            .ok_or(ActivityDomainError::EmptyActivityId)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActivityId {
    type Error = ActivityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External learner identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::EmptyUserId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ActivityDomainError> {
        non_empty(value.into())
            .map(Self)
            .ok_or(ActivityDomainError::EmptyUserId)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ActivityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn non_empty(raw: String) -> Option<String> {
    let normalized = raw.trim();
    (!normalized.is_empty()).then(|| normalized.to_owned())
}
