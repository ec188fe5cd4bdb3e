//! Shared application state handed to every handler.

use super::pages::Pages;
use crate::activity::services::TaskTrackFacade;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{SortStrategyRegistry, TaskFactory},
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Facade type served by the HTTP adapter.
pub type AppFacade = TaskTrackFacade<InMemoryTaskRepository, DefaultClock>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Coordinating facade; constructed once per process.
    pub facade: Arc<AppFacade>,
    /// Compiled HTML pages.
    pub pages: Arc<Pages>,
}

impl AppState {
    /// Creates state around an existing facade.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the page templates fail to parse.
    pub fn new(facade: Arc<AppFacade>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            facade,
            pages: Arc::new(Pages::new()?),
        })
    }

    /// Creates state backed by an empty in-memory repository and the system
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the page templates fail to parse.
    pub fn in_memory() -> Result<Self, minijinja::Error> {
        let facade = TaskTrackFacade::new(
            TaskFactory::new(Arc::new(DefaultClock)),
            Arc::new(InMemoryTaskRepository::new()),
            SortStrategyRegistry::new(),
        );
        Self::new(Arc::new(facade))
    }
}
