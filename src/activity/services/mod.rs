//! Application services for the activity surface.

mod facade;

pub use facade::{TaskListing, TaskTrackError, TaskTrackFacade, TaskTrackResult};
