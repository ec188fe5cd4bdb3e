//! Single entry point composing task creation, storage and ordering.

use crate::activity::domain::{
    ANALYTICS_CATALOGUE, ActivityDomainError, ActivityId, ActivityParams, AnalyticsDescriptor,
    AnalyticsReport, UserId,
};
use crate::task::{
    domain::{TaskDomainError, TaskSummary},
    ports::{TaskRepository, TaskRepositoryError},
    services::{
        DEFAULT_STRATEGY, DeployTaskRequest, SortStrategy, SortStrategyRegistry, TaskFactory,
        TaskFactoryError, UnknownSortStrategyError,
    },
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by facade operations.
#[derive(Debug, Error)]
pub enum TaskTrackError {
    /// Task construction failed.
    #[error(transparent)]
    Factory(#[from] TaskFactoryError),
    /// The requested sort strategy is not registered.
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownSortStrategyError),
    /// Activity identifiers failed validation.
    #[error(transparent)]
    Activity(#[from] ActivityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl From<TaskDomainError> for TaskTrackError {
    fn from(err: TaskDomainError) -> Self {
        Self::Factory(TaskFactoryError::Validation(err))
    }
}

impl TaskTrackError {
    /// Returns `true` when the caller supplied a bad request, `false` for
    /// internal consistency or storage failures.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::Factory(_) | Self::UnknownStrategy(_) | Self::Activity(_) => true,
            Self::Repository(_) => false,
        }
    }
}

/// Result type for facade operations.
pub type TaskTrackResult<T> = Result<T, TaskTrackError>;

/// Ordered task listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListing {
    /// Task summaries in strategy order.
    pub tasks: Vec<TaskSummary>,
    /// Number of tasks listed.
    pub count: usize,
    /// Name of the strategy applied.
    pub sorted_by: &'static str,
}

/// Coordinating facade over the task factory, repository and strategy
/// registry.
///
/// All collaborators are injected once at construction and reused for
/// every call.
pub struct TaskTrackFacade<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    factory: TaskFactory<C>,
    repository: Arc<R>,
    strategies: SortStrategyRegistry,
}

impl<R, C> TaskTrackFacade<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a facade over the given collaborators.
    #[must_use]
    pub const fn new(
        factory: TaskFactory<C>,
        repository: Arc<R>,
        strategies: SortStrategyRegistry,
    ) -> Self {
        Self {
            factory,
            repository,
            strategies,
        }
    }

    /// Builds a task from the request and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackError::Factory`] when the task type is unknown or a
    /// field fails validation, and [`TaskTrackError::Repository`] when the
    /// repository rejects the task.
    pub fn deploy_task(&self, request: &DeployTaskRequest) -> TaskTrackResult<TaskSummary> {
        let task = self
            .factory
            .create(request.task_type(), request.title(), request.params())?;
        self.repository.add(&task)?;

        info!(task_id = %task.id(), kind = %task.kind(), "task deployed");
        Ok(TaskSummary::from(&task))
    }

    /// Lists every stored task ordered by the named strategy.
    ///
    /// `None` or a blank name selects the identity strategy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackError::UnknownStrategy`] when `sort_by` is not
    /// registered and [`TaskTrackError::Repository`] when the snapshot cannot
    /// be read.
    pub fn list_tasks(&self, sort_by: Option<&str>) -> TaskTrackResult<TaskListing> {
        let name = sort_by
            .filter(|requested| !requested.trim().is_empty())
            .unwrap_or(DEFAULT_STRATEGY);
        let strategy = self.strategies.get(name)?;
        let snapshot = self.repository.all()?;
        let tasks: Vec<TaskSummary> = strategy
            .apply(snapshot)
            .iter()
            .map(TaskSummary::from)
            .collect();

        debug!(
            strategy = strategy.name(),
            count = tasks.len(),
            "listed tasks"
        );
        Ok(TaskListing {
            count: tasks.len(),
            tasks,
            sorted_by: strategy.name(),
        })
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackError::Repository`] when the store cannot be read.
    pub fn task_count(&self) -> TaskTrackResult<usize> {
        Ok(self.repository.count()?)
    }

    /// Returns the names accepted by [`Self::list_tasks`].
    #[must_use]
    pub fn list_sort_strategies(&self) -> Vec<&'static str> {
        self.strategies.names()
    }

    /// Returns every registered strategy with its description.
    #[must_use]
    pub const fn sort_strategies(&self) -> &'static [SortStrategy] {
        self.strategies.strategies()
    }

    /// Returns the supported analytics kinds.
    #[must_use]
    pub const fn list_analytics_types(&self) -> &'static [AnalyticsDescriptor] {
        &ANALYTICS_CATALOGUE
    }

    /// Returns the analytics report for an activity instance and learner.
    ///
    /// The figures are fixed placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackError::Activity`] when either identifier is empty.
    pub fn generate_analytics(
        &self,
        activity_id: &str,
        user_id: &str,
    ) -> TaskTrackResult<AnalyticsReport> {
        let activity = ActivityId::new(activity_id)?;
        let user = UserId::new(user_id)?;

        debug!(activity_id = %activity, user_id = %user, "generated analytics");
        Ok(AnalyticsReport::placeholder(activity, user))
    }

    /// Returns the activity description and its configuration parameters.
    #[must_use]
    pub const fn config_params(&self) -> ActivityParams {
        ActivityParams::tasktrack()
    }
}
