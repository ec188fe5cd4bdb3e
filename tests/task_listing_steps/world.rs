//! Shared world state for task listing BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::{
    activity::services::{TaskListing, TaskTrackError, TaskTrackFacade},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::TaskSummary,
        services::{SortStrategyRegistry, TaskFactory},
    },
};

/// Facade type used by the BDD world.
pub type TestFacade = TaskTrackFacade<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task listing behaviour tests.
pub struct TaskListingWorld {
    pub facade: TestFacade,
    pub last_listing: Option<Result<TaskListing, TaskTrackError>>,
    pub last_deployment: Option<Result<TaskSummary, TaskTrackError>>,
}

impl TaskListingWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let facade = TaskTrackFacade::new(
            TaskFactory::new(Arc::new(DefaultClock)),
            Arc::new(InMemoryTaskRepository::new()),
            SortStrategyRegistry::new(),
        );

        Self {
            facade,
            last_listing: None,
            last_deployment: None,
        }
    }
}

impl Default for TaskListingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListingWorld {
    TaskListingWorld::default()
}
