//! Then steps for task listing BDD scenarios.

use super::world::TaskListingWorld;
use rstest_bdd_macros::then;
use tasktrack::{activity::services::TaskTrackError, task::services::TaskFactoryError};

#[then(r#"the listed titles are "{expected}""#)]
fn listed_titles_are(world: &TaskListingWorld, expected: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;

    let titles: Vec<&str> = listing
        .tasks
        .iter()
        .map(|summary| summary.title.as_str())
        .collect();
    let wanted: Vec<&str> = expected.split(", ").collect();

    if titles != wanted {
        return Err(eyre::eyre!("expected titles {wanted:?}, found {titles:?}"));
    }
    Ok(())
}

#[then("the listing fails with an unknown strategy error")]
fn listing_fails_with_unknown_strategy(world: &TaskListingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;

    if !matches!(result, Err(TaskTrackError::UnknownStrategy(_))) {
        return Err(eyre::eyre!("expected UnknownStrategy error, got {result:?}"));
    }
    Ok(())
}

#[then("the deployment fails with an unknown task type error")]
fn deployment_fails_with_unknown_task_type(world: &TaskListingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_deployment
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing deployment result"))?;

    if !matches!(
        result,
        Err(TaskTrackError::Factory(TaskFactoryError::UnknownTaskType(_)))
    ) {
        return Err(eyre::eyre!("expected UnknownTaskType error, got {result:?}"));
    }
    Ok(())
}

#[then("the repository holds {count:usize} task")]
fn repository_holds(world: &TaskListingWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.facade.task_count()?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {stored}"));
    }
    Ok(())
}
