//! Integration tests for concurrent access to one facade.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use super::helpers::{TestFacade, facade, listed_ids};
use rstest::rstest;
use tasktrack::task::services::DeployTaskRequest;

#[rstest]
fn parallel_deployments_are_all_listed(facade: TestFacade) -> Result<(), eyre::Report> {
    let shared = Arc::new(facade);
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let facade_ref = Arc::clone(&shared);
            thread::spawn(move || {
                (0..50)
                    .zip((1..=5_i64).cycle())
                    .try_for_each(|(index, priority)| {
                        let request =
                            DeployTaskRequest::new("priority", format!("w{worker}-{index}"))
                                .with_priority(priority);
                        facade_ref.deploy_task(&request).map(|_| ())
                    })
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.join().map_err(|_| eyre::eyre!("worker panicked"))?;
        outcome?;
    }

    let ids = listed_ids(&shared, "priority")?;
    let unique: HashSet<_> = ids.iter().collect();
    eyre::ensure!(ids.len() == 200, "expected 200 tasks, got {}", ids.len());
    eyre::ensure!(unique.len() == 200, "duplicate identifiers listed");
    Ok(())
}
