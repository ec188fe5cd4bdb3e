//! When steps for task listing BDD scenarios.

use super::world::TaskListingWorld;
use rstest_bdd_macros::when;
use tasktrack::task::services::DeployTaskRequest;

#[when(r#"the tasks are listed by "{strategy}""#)]
fn list_tasks(world: &mut TaskListingWorld, strategy: String) {
    world.last_listing = Some(world.facade.list_tasks(Some(&strategy)));
}

#[when(r#"a task of type "{task_type}" titled "{title}" is deployed"#)]
fn deploy_task(world: &mut TaskListingWorld, task_type: String, title: String) {
    let result = world
        .facade
        .deploy_task(&DeployTaskRequest::new(task_type, title));
    world.last_deployment = Some(result);
}
