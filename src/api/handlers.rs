//! HTTP handlers translating requests into facade calls.
//!
//! Handlers own no logic beyond payload extraction and response shaping.

use super::{error::ApiError, pages::HOME_PAGE, state::AppState};
use crate::activity::{
    domain::{ACTIVITY_NAME, ActivityParams, AnalyticsDescriptor, AnalyticsReport},
    services::{TaskListing, TaskTrackError},
};
use crate::task::{domain::TaskSummary, services::DeployTaskRequest};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::Html,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Response body for a deployed task.
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    /// Always `ok`.
    pub status: &'static str,
    /// Summary of the created task.
    pub created_task: TaskSummary,
}

/// Query parameters accepted by the task listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Sort strategy name.
    pub sort_by: Option<String>,
}

/// Response body for strategy discovery.
#[derive(Debug, Serialize)]
pub struct SortStrategiesResponse {
    /// Accepted `sort_by` values.
    pub available_strategies: Vec<&'static str>,
    /// Human description keyed by strategy name.
    pub description: BTreeMap<&'static str, &'static str>,
}

/// Response body for analytics discovery.
#[derive(Debug, Serialize)]
pub struct AnalyticsListResponse {
    /// Activity display name.
    pub activity: &'static str,
    /// Supported analytics kinds.
    pub analytics: &'static [AnalyticsDescriptor],
}

/// Request body for an analytics report.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsRequest {
    /// Activity instance identifier.
    #[serde(rename = "activityID", default)]
    pub activity_id: String,
    /// Learner identifier.
    #[serde(rename = "userID", default)]
    pub user_id: String,
}

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// `GET /tasktrack/config`
pub async fn config_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let params = state.facade.config_params();
    Ok(Html(state.pages.render_config(&params)?))
}

/// `GET /tasktrack/json-params`
pub async fn json_params(State(state): State<AppState>) -> Json<ActivityParams> {
    Json(state.facade.config_params())
}

/// `POST /tasktrack/deploy`
pub async fn deploy_task(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<DeployResponse>, ApiError> {
    let Json(body) = payload?;
    let request = DeployTaskRequest::from_payload(body).map_err(TaskTrackError::from)?;
    let created_task = state.facade.deploy_task(&request)?;
    Ok(Json(DeployResponse {
        status: "ok",
        created_task,
    }))
}

/// `GET /tasktrack/tasks`
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<TaskListing>, ApiError> {
    let Query(params) = query?;
    Ok(Json(state.facade.list_tasks(params.sort_by.as_deref())?))
}

/// `GET /tasktrack/sort-strategies`
pub async fn sort_strategies(State(state): State<AppState>) -> Json<SortStrategiesResponse> {
    let description = state
        .facade
        .sort_strategies()
        .iter()
        .map(|strategy| (strategy.name(), strategy.description()))
        .collect();
    Json(SortStrategiesResponse {
        available_strategies: state.facade.list_sort_strategies(),
        description,
    })
}

/// `GET /tasktrack/analytics-list`
pub async fn analytics_list(State(state): State<AppState>) -> Json<AnalyticsListResponse> {
    Json(AnalyticsListResponse {
        activity: ACTIVITY_NAME,
        analytics: state.facade.list_analytics_types(),
    })
}

/// `POST /tasktrack/analytics`
pub async fn analytics(
    State(state): State<AppState>,
    payload: Result<Json<AnalyticsRequest>, JsonRejection>,
) -> Result<Json<AnalyticsReport>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(
        state
            .facade
            .generate_analytics(&body.activity_id, &body.user_id)?,
    ))
}
