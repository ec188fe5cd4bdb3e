//! Task factory building task variants from untyped request payloads.

use crate::task::domain::{
    DeadlineOffset, ParseTaskKindError, Priority, Task, TaskDomainError, TaskKind, TaskTitle,
};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use thiserror::Error;

/// Untyped extra parameters accompanying a task creation request.
pub type TaskParams = Map<String, Value>;

/// Payload key carrying the priority level of a priority task.
pub const PRIORITY_PARAM: &str = "priority";

/// Payload key carrying the deadline offset, in minutes, of a deadline task.
pub const MINUTES_FROM_NOW_PARAM: &str = "minutes_from_now";

/// Request payload for deploying a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTaskRequest {
    task_type: String,
    title: String,
    params: TaskParams,
}

impl DeployTaskRequest {
    /// Creates a request with the required type tag and title.
    #[must_use]
    pub fn new(task_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            title: title.into(),
            params: TaskParams::new(),
        }
    }

    /// Sets the priority level parameter.
    #[must_use]
    pub fn with_priority(self, priority: i64) -> Self {
        self.with_param(PRIORITY_PARAM, Value::from(priority))
    }

    /// Sets the deadline offset parameter.
    #[must_use]
    pub fn with_minutes_from_now(self, minutes: i64) -> Self {
        self.with_param(MINUTES_FROM_NOW_PARAM, Value::from(minutes))
    }

    /// Sets an arbitrary extra parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Builds a request from a parsed key-value payload.
    ///
    /// `task_type` and `title` are read as strings; every other key is kept
    /// as an extra parameter for the factory.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingField`] when `task_type` or `title`
    /// is absent or null, and [`TaskDomainError::MalformedParameter`] when
    /// either is not a string.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, TaskDomainError> {
        let task_type = take_string(&mut payload, "task_type")?;
        let title = take_string(&mut payload, "title")?;
        Ok(Self {
            task_type,
            title,
            params: payload,
        })
    }

    /// Returns the requested task type tag.
    #[must_use]
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the extra parameters.
    #[must_use]
    pub const fn params(&self) -> &TaskParams {
        &self.params
    }
}

fn take_string(
    payload: &mut Map<String, Value>,
    name: &'static str,
) -> Result<String, TaskDomainError> {
    match payload.remove(name) {
        None | Some(Value::Null) => Err(TaskDomainError::MissingField(name)),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(TaskDomainError::MalformedParameter {
            name: name.to_owned(),
            value: other.to_string(),
            expected: "a string",
        }),
    }
}

/// Errors returned while building a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFactoryError {
    /// The task type tag is not supported.
    #[error(transparent)]
    UnknownTaskType(#[from] ParseTaskKindError),
    /// A title or parameter failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
}

/// Builds task variants and assigns their identifier and creation time.
///
/// Creation times never run backwards across tasks built by one factory,
/// even when the underlying clock does. Clones share that guarantee.
pub struct TaskFactory<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    last_issued_nanos: Arc<AtomicI64>,
}

impl<C> Clone for TaskFactory<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            last_issued_nanos: Arc::clone(&self.last_issued_nanos),
        }
    }
}

impl<C> TaskFactory<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a factory stamping tasks with the given clock.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            last_issued_nanos: Arc::new(AtomicI64::new(i64::MIN)),
        }
    }

    /// Creates a task of the given kind.
    ///
    /// A missing `priority` defaults to [`Priority::DEFAULT`] and a missing
    /// `minutes_from_now` to [`DeadlineOffset::DEFAULT`]. Parameters that do
    /// not belong to the requested kind are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFactoryError::UnknownTaskType`] for an unsupported kind
    /// and [`TaskFactoryError::Validation`] for an empty title or a present
    /// parameter that is malformed or out of range.
    pub fn create(
        &self,
        kind: &str,
        title: &str,
        params: &TaskParams,
    ) -> Result<Task, TaskFactoryError> {
        let task_kind = TaskKind::try_from(kind)?;
        let task_title = TaskTitle::new(title)?;
        let stamp = MonotonicClock {
            inner: &*self.clock,
            last_issued_nanos: &self.last_issued_nanos,
        };

        let task = match task_kind {
            TaskKind::Simple => Task::new_simple(task_title, &stamp),
            TaskKind::Priority => {
                let priority = integer_param(params, PRIORITY_PARAM)?
                    .map(Priority::new)
                    .transpose()?
                    .unwrap_or(Priority::DEFAULT);
                Task::new_priority(task_title, priority, &stamp)
            }
            TaskKind::Deadline => {
                let offset = integer_param(params, MINUTES_FROM_NOW_PARAM)?
                    .map(DeadlineOffset::from_minutes)
                    .transpose()?
                    .unwrap_or(DeadlineOffset::DEFAULT);
                Task::new_deadline(task_title, offset, &stamp)
            }
        };
        Ok(task)
    }
}

/// Clock view that never returns an instant earlier than one it already
/// returned.
struct MonotonicClock<'a, C> {
    inner: &'a C,
    last_issued_nanos: &'a AtomicI64,
}

impl<C: Clock> Clock for MonotonicClock<'_, C> {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let now = self.inner.utc();
        let Some(nanos) = now.timestamp_nanos_opt() else {
            return now;
        };
        let previous = self.last_issued_nanos.fetch_max(nanos, Ordering::SeqCst);
        if previous > nanos {
            DateTime::from_timestamp_nanos(previous)
        } else {
            now
        }
    }
}

/// Reads an optional integer parameter.
///
/// Accepts JSON integers and strings holding an integer; `null` counts as
/// absent.
fn integer_param(params: &TaskParams, name: &str) -> Result<Option<i64>, TaskDomainError> {
    let malformed = |value: &Value| TaskDomainError::MalformedParameter {
        name: name.to_owned(),
        value: value.to_string(),
        expected: "an integer",
    };

    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(number)) => {
            number.as_i64().map(Some).ok_or_else(|| malformed(value))
        }
        Some(value @ Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| malformed(value)),
        Some(value) => Err(malformed(value)),
    }
}
