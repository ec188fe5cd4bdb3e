//! Validated variant-specific task attributes.

use super::TaskDomainError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a priority task, between 1 and 5 inclusive.
///
/// Higher values are more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct Priority(u8);

impl Priority {
    /// Lowest accepted priority.
    pub const MIN: u8 = 1;

    /// Highest accepted priority.
    pub const MAX: u8 = 5;

    /// Priority applied when a request does not name one.
    pub const DEFAULT: Self = Self(1);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOutOfRange`] when the value lies
    /// outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|level| (Self::MIN..=Self::MAX).contains(level))
            .map(Self)
            .ok_or(TaskDomainError::PriorityOutOfRange(value))
    }

    /// Returns the underlying level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offset in minutes between task creation and its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeadlineOffset(i64);

impl DeadlineOffset {
    /// Largest accepted offset: one year of minutes.
    pub const MAX_MINUTES: i64 = 525_600;

    /// Offset applied when a request does not name one.
    pub const DEFAULT: Self = Self(30);

    /// Creates a validated offset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DeadlineOffsetOutOfRange`] when the value is
    /// negative or exceeds [`Self::MAX_MINUTES`].
    pub const fn from_minutes(minutes: i64) -> Result<Self, TaskDomainError> {
        if minutes < 0 || minutes > Self::MAX_MINUTES {
            return Err(TaskDomainError::DeadlineOffsetOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    /// Returns the offset as a duration.
    #[must_use]
    pub fn as_delta(self) -> TimeDelta {
        TimeDelta::minutes(self.0)
    }
}
