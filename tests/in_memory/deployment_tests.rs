//! Integration tests for deploying tasks through the facade.

use super::helpers::{TestFacade, deploy, facade};
use rstest::rstest;
use serde_json::json;
use tasktrack::{
    activity::services::TaskTrackError,
    task::{
        domain::TaskKind,
        services::{DeployTaskRequest, TaskFactoryError},
    },
};

#[rstest]
fn deploy_from_payload_builds_deadline_task(facade: TestFacade) {
    let payload = json!({
        "task_type": "deadline",
        "title": "Hand in essay",
        "minutes_from_now": 120,
    });
    let serde_json::Value::Object(map) = payload else {
        panic!("payload literal is an object");
    };
    let request = DeployTaskRequest::from_payload(map).expect("payload should parse");

    let summary = facade
        .deploy_task(&request)
        .expect("deployment should succeed");

    assert_eq!(summary.kind, TaskKind::Deadline);
    assert_eq!(
        summary.deadline.map(|due| due - summary.created_at),
        Some(chrono::TimeDelta::minutes(120))
    );
    assert_eq!(summary.priority, None);
}

#[rstest]
fn summaries_serialize_kind_specific_fields(facade: TestFacade) {
    let summary = facade
        .deploy_task(&DeployTaskRequest::new("priority", "Escalate").with_priority(5))
        .expect("deployment should succeed");
    let json = serde_json::to_value(&summary).expect("summary serializes");

    assert_eq!(json["kind"], "priority");
    assert_eq!(json["priority"], 5);
    assert!(json.get("deadline").is_none());
    assert!(json["created_at"].is_string());
}

#[rstest]
fn rejected_deployments_store_nothing(facade: TestFacade) -> Result<(), eyre::Report> {
    let rejected = [
        DeployTaskRequest::new("unknown", "nope"),
        DeployTaskRequest::new("simple", "   "),
        DeployTaskRequest::new("priority", "too high").with_priority(6),
        DeployTaskRequest::new("deadline", "in the past").with_minutes_from_now(-1),
    ];

    for request in &rejected {
        let result = facade.deploy_task(request);
        eyre::ensure!(
            matches!(result, Err(TaskTrackError::Factory(_))),
            "expected factory rejection for {request:?}, got {result:?}"
        );
    }

    eyre::ensure!(facade.task_count()? == 0, "rejected requests were stored");
    Ok(())
}

#[rstest]
fn unknown_type_reports_offending_tag(facade: TestFacade) -> Result<(), eyre::Report> {
    deploy(&facade, &DeployTaskRequest::new("simple", "existing"))?;

    let Err(TaskTrackError::Factory(TaskFactoryError::UnknownTaskType(err))) =
        facade.deploy_task(&DeployTaskRequest::new("recurring", "weekly"))
    else {
        return Err(eyre::eyre!("expected unknown task type error"));
    };

    eyre::ensure!(err.0 == "recurring", "unexpected tag {}", err.0);
    eyre::ensure!(facade.task_count()? == 1, "repository changed");
    Ok(())
}
