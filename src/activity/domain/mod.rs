//! Domain model for the activity surface offered to the hosting platform.

mod analytics;
mod error;
mod ids;
mod params;

pub use analytics::{
    ANALYTICS_CATALOGUE, AnalyticsDescriptor, AnalyticsMetrics, AnalyticsReport, MetricValueType,
};
pub use error::ActivityDomainError;
pub use ids::{ActivityId, UserId};
pub use params::{
    ACTIVITY_DESCRIPTION, ACTIVITY_NAME, ActivityParams, CONFIG_PARAMS, ConfigParam, ParamDefault,
    ParamType,
};
