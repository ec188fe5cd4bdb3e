//! Configuration parameters advertised to the hosting platform.

use serde::Serialize;

/// Display name of the activity.
pub const ACTIVITY_NAME: &str = "TaskTrack-AP";

/// Short description of the activity.
pub const ACTIVITY_DESCRIPTION: &str = "Small task manager with time-limited tasks.";

/// Value type of a configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Whole number within optional bounds.
    Integer,
    /// On/off switch.
    Boolean,
}

/// Default value of a configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    /// Integer default.
    Integer(i64),
    /// Boolean default.
    Boolean(bool),
}

/// Description of one configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigParam {
    /// Machine name.
    pub name: &'static str,
    /// Value type.
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Human label.
    pub label: &'static str,
    /// Default value.
    pub default: ParamDefault,
    /// Inclusive lower bound for integer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound for integer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Every configuration parameter the activity accepts.
pub static CONFIG_PARAMS: [ConfigParam; 3] = [
    ConfigParam {
        name: "max_tasks",
        param_type: ParamType::Integer,
        label: "Maximum number of tasks",
        default: ParamDefault::Integer(5),
        min: Some(1),
        max: Some(20),
    },
    ConfigParam {
        name: "time_limit_minutes",
        param_type: ParamType::Integer,
        label: "Time limit (minutes)",
        default: ParamDefault::Integer(30),
        min: Some(5),
        max: Some(180),
    },
    ConfigParam {
        name: "allow_reorder",
        param_type: ParamType::Boolean,
        label: "Allow task reordering",
        default: ParamDefault::Boolean(true),
        min: None,
        max: None,
    },
];

/// Activity description with its configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityParams {
    /// Activity display name.
    pub activity: &'static str,
    /// Activity description.
    pub description: &'static str,
    /// Accepted configuration parameters.
    pub params: &'static [ConfigParam],
}

impl ActivityParams {
    /// Returns the description of this activity.
    #[must_use]
    pub const fn tasktrack() -> Self {
        Self {
            activity: ACTIVITY_NAME,
            description: ACTIVITY_DESCRIPTION,
            params: &CONFIG_PARAMS,
        }
    }
}
