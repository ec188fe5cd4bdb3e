//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::{
    activity::services::TaskTrackFacade,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::TaskId,
        services::{DeployTaskRequest, SortStrategyRegistry, TaskFactory},
    },
};

/// Facade type used by integration tests.
pub type TestFacade = TaskTrackFacade<InMemoryTaskRepository, DefaultClock>;

/// Provides a facade over a fresh in-memory repository.
#[fixture]
pub fn facade() -> TestFacade {
    TaskTrackFacade::new(
        TaskFactory::new(Arc::new(DefaultClock)),
        Arc::new(InMemoryTaskRepository::new()),
        SortStrategyRegistry::new(),
    )
}

/// Deploys a task and returns its identifier.
///
/// # Errors
///
/// Returns an error if the facade rejects the request.
pub fn deploy(facade: &TestFacade, request: &DeployTaskRequest) -> Result<TaskId, eyre::Report> {
    Ok(facade.deploy_task(request)?.id)
}

/// Lists task identifiers in the order produced by `sort_by`.
///
/// # Errors
///
/// Returns an error if the listing fails.
pub fn listed_ids(facade: &TestFacade, sort_by: &str) -> Result<Vec<TaskId>, eyre::Report> {
    Ok(facade
        .list_tasks(Some(sort_by))?
        .tasks
        .into_iter()
        .map(|summary| summary.id)
        .collect())
}
