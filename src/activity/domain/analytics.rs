//! Analytics catalogue and placeholder reports.
//!
//! No aggregation is performed: reports carry fixed figures keyed by the
//! requesting activity and user.

use super::{ActivityId, UserId};
use serde::Serialize;

/// Value type of an analytics metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricValueType {
    /// Whole number.
    Integer,
    /// Real number.
    Number,
}

/// Description of one supported analytics kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalyticsDescriptor {
    /// Machine name of the metric.
    pub name: &'static str,
    /// Human label.
    pub label: &'static str,
    /// Value type reported for the metric.
    #[serde(rename = "type")]
    pub value_type: MetricValueType,
}

/// Every analytics kind the activity reports.
pub static ANALYTICS_CATALOGUE: [AnalyticsDescriptor; 5] = [
    AnalyticsDescriptor {
        name: "tasks_created",
        label: "Tasks created",
        value_type: MetricValueType::Integer,
    },
    AnalyticsDescriptor {
        name: "tasks_completed",
        label: "Tasks completed",
        value_type: MetricValueType::Integer,
    },
    AnalyticsDescriptor {
        name: "tasks_completed_on_time",
        label: "Tasks completed before their deadline",
        value_type: MetricValueType::Integer,
    },
    AnalyticsDescriptor {
        name: "total_time_minutes",
        label: "Total time spent (minutes)",
        value_type: MetricValueType::Number,
    },
    AnalyticsDescriptor {
        name: "completion_rate",
        label: "Completion rate (%)",
        value_type: MetricValueType::Number,
    },
];

/// Metric values of an analytics report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsMetrics {
    /// Number of tasks created.
    pub tasks_created: u64,
    /// Number of tasks completed.
    pub tasks_completed: u64,
    /// Number of tasks completed before their deadline.
    pub tasks_completed_on_time: u64,
    /// Total time spent, in minutes.
    pub total_time_minutes: f64,
    /// Share of tasks completed, as a percentage.
    pub completion_rate: f64,
}

impl AnalyticsMetrics {
    /// Fixed figures returned until real aggregation exists.
    pub const PLACEHOLDER: Self = Self {
        tasks_created: 5,
        tasks_completed: 4,
        tasks_completed_on_time: 3,
        total_time_minutes: 27.5,
        completion_rate: 80.0,
    };
}

/// Analytics report for one learner in one activity instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    /// Activity instance the report refers to.
    #[serde(rename = "activityID")]
    pub activity_id: ActivityId,
    /// Learner the report refers to.
    #[serde(rename = "userID")]
    pub user_id: UserId,
    /// Reported figures.
    pub metrics: AnalyticsMetrics,
}

impl AnalyticsReport {
    /// Builds the placeholder report for the given identifiers.
    #[must_use]
    pub const fn placeholder(activity_id: ActivityId, user_id: UserId) -> Self {
        Self {
            activity_id,
            user_id,
            metrics: AnalyticsMetrics::PLACEHOLDER,
        }
    }
}
