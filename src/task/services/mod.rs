//! Application services for task creation and ordering.

mod factory;
mod sorting;

pub use factory::{
    DeployTaskRequest, MINUTES_FROM_NOW_PARAM, PRIORITY_PARAM, TaskFactory, TaskFactoryError,
    TaskParams,
};
pub use sorting::{
    DEFAULT_STRATEGY, SortStrategy, SortStrategyRegistry, TaskOrdering, UnknownSortStrategyError,
};
