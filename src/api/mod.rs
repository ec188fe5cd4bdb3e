//! HTTP adapter exposing the facade to the hosting learning platform.

mod error;
mod handlers;
mod pages;
mod routes;
mod state;

pub use error::ApiError;
pub use handlers::{
    AnalyticsListResponse, AnalyticsRequest, DeployResponse, ListTasksQuery, SortStrategiesResponse,
};
pub use pages::{HOME_PAGE, Pages};
pub use routes::{router, serve};
pub use state::{AppFacade, AppState};
