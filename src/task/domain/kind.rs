//! Closed set of task kinds.

use super::ParseTaskKindError;
use serde::Serialize;
use std::fmt;

/// Tag identifying which variant-specific attributes a task carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain task with no extra attributes.
    Simple,
    /// Task with a priority level.
    Priority,
    /// Task with a due timestamp.
    Deadline,
}

impl TaskKind {
    /// Returns the canonical request tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Priority => "priority",
            Self::Deadline => "deadline",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "simple" => Ok(Self::Simple),
            "priority" => Ok(Self::Priority),
            "deadline" => Ok(Self::Deadline),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
