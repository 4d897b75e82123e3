//! Helper functions for planner test suites

use planner::{MemoryCatalog, MemoryProfiles, Planner, ProfileStore};
use shared::{Roadmap, UserState};
use std::sync::Arc;

/// Construction and assertion helpers
pub struct TestHelpers;

impl TestHelpers {
    /// Build a planner over an in-memory catalog and the given users
    pub async fn planner_from(
        catalog_json: &str,
        users: Vec<UserState>,
    ) -> Planner<MemoryCatalog, MemoryProfiles> {
        let catalog = MemoryCatalog::from_json(catalog_json).expect("fixture catalog must parse");
        let profiles = MemoryProfiles::new();
        for user in users {
            profiles
                .create_user_state(user)
                .await
                .expect("fixture user must insert");
        }
        Planner::new(Arc::new(catalog), Arc::new(profiles))
    }

    /// Solution ids of one goal, in emitted order
    pub fn solution_order(roadmap: &Roadmap, goal_index: usize) -> Vec<&str> {
        roadmap.goals[goal_index]
            .solutions
            .iter()
            .map(|solution| solution.solution_id.as_str())
            .collect()
    }
}
