//! Integration tests for ordered task listings.

use std::collections::HashSet;

use super::helpers::{TestFacade, deploy, facade, listed_ids};
use rstest::rstest;
use tasktrack::{activity::services::TaskTrackError, task::services::DeployTaskRequest};

/// Deploys one task of every kind plus extra priority and deadline tasks.
fn seed(facade: &TestFacade) -> Result<(), eyre::Report> {
    deploy(
        facade,
        &DeployTaskRequest::new("priority", "p2").with_priority(2),
    )?;
    deploy(
        facade,
        &DeployTaskRequest::new("deadline", "d15").with_minutes_from_now(15),
    )?;
    deploy(facade, &DeployTaskRequest::new("simple", "s"))?;
    deploy(
        facade,
        &DeployTaskRequest::new("priority", "p4").with_priority(4),
    )?;
    deploy(
        facade,
        &DeployTaskRequest::new("deadline", "d1").with_minutes_from_now(1),
    )?;
    Ok(())
}

fn listed_titles(facade: &TestFacade, sort_by: &str) -> Result<Vec<String>, eyre::Report> {
    Ok(facade
        .list_tasks(Some(sort_by))?
        .tasks
        .into_iter()
        .map(|summary| summary.title)
        .collect())
}

#[rstest]
fn priority_listing(facade: TestFacade) -> Result<(), eyre::Report> {
    seed(&facade)?;
    let titles = listed_titles(&facade, "priority")?;
    eyre::ensure!(
        titles == ["p4", "p2", "d15", "s", "d1"],
        "unexpected order {titles:?}"
    );
    Ok(())
}

#[rstest]
fn deadline_listing(facade: TestFacade) -> Result<(), eyre::Report> {
    seed(&facade)?;
    let titles = listed_titles(&facade, "deadline")?;
    eyre::ensure!(
        titles == ["d1", "d15", "p2", "s", "p4"],
        "unexpected order {titles:?}"
    );
    Ok(())
}

#[rstest]
fn default_listing_matches_deployment_order(facade: TestFacade) -> Result<(), eyre::Report> {
    seed(&facade)?;
    let titles = listed_titles(&facade, "default")?;
    eyre::ensure!(
        titles == ["p2", "d15", "s", "p4", "d1"],
        "unexpected order {titles:?}"
    );
    Ok(())
}

#[rstest]
fn sorting_never_drops_or_duplicates(facade: TestFacade) -> Result<(), eyre::Report> {
    seed(&facade)?;
    let baseline = listed_ids(&facade, "default")?;
    let expected: HashSet<_> = baseline.iter().copied().collect();

    for name in facade.list_sort_strategies() {
        let ids = listed_ids(&facade, name)?;
        let unique: HashSet<_> = ids.iter().copied().collect();
        eyre::ensure!(ids.len() == baseline.len(), "{name} changed length");
        eyre::ensure!(unique == expected, "{name} changed membership");
    }
    Ok(())
}

#[rstest]
fn unknown_strategy_is_rejected(facade: TestFacade) -> Result<(), eyre::Report> {
    seed(&facade)?;
    let result = facade.list_tasks(Some("alphabetical"));
    eyre::ensure!(
        matches!(result, Err(TaskTrackError::UnknownStrategy(_))),
        "expected unknown strategy error, got {result:?}"
    );
    eyre::ensure!(facade.task_count()? == 5, "tasks were lost");
    Ok(())
}
