//! Given steps for task listing BDD scenarios.

use super::world::TaskListingWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::services::DeployTaskRequest;

fn seed(world: &TaskListingWorld, request: &DeployTaskRequest) -> Result<(), eyre::Report> {
    world
        .facade
        .deploy_task(request)
        .wrap_err("deploy task for listing scenario")?;
    Ok(())
}

#[given(r#"a simple task "{title}""#)]
fn simple_task(world: &mut TaskListingWorld, title: String) -> Result<(), eyre::Report> {
    seed(world, &DeployTaskRequest::new("simple", title))
}

#[given(r#"a priority task "{title}" with priority {priority:i64}"#)]
fn priority_task(
    world: &mut TaskListingWorld,
    title: String,
    priority: i64,
) -> Result<(), eyre::Report> {
    seed(
        world,
        &DeployTaskRequest::new("priority", title).with_priority(priority),
    )
}

#[given(r#"a deadline task "{title}" due in {minutes:i64} minutes"#)]
fn deadline_task(
    world: &mut TaskListingWorld,
    title: String,
    minutes: i64,
) -> Result<(), eyre::Report> {
    seed(
        world,
        &DeployTaskRequest::new("deadline", title).with_minutes_from_now(minutes),
    )
}
