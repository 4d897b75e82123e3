//! The produced roadmap artifact
//!
//! Solutions carry only a count of surviving claims rather than full
//! graphlet payloads, keeping the external response bounded. Callers that
//! need graphlet detail can assemble individual claims through the planner
//! library.

use crate::types::{GoalId, Phase, SolutionId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A viable solution within a goal, ordered by strategy ranking
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSolution {
    pub solution_id: SolutionId,
    pub solution_name: String,
    pub solution_description: String,
    /// Position in the goal's strategy ranking; lower is better, unranked
    /// solutions share the length of the ranking list
    pub strategy_ranking: usize,
    pub user_rationale: String,
    pub assessed_claims_count: usize,
}

/// A goal that survived filtering, with its viable solutions sorted by rank
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadmapGoal {
    pub goal_id: GoalId,
    pub goal_name: String,
    pub goal_phase: Phase,
    pub goal_description: String,
    pub solutions: Vec<RoadmapSolution>,
}

/// Complete prioritized roadmap for one user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub user_id: UserId,
    pub generated_at: DateTime<Utc>,
    pub total_goals: usize,
    pub goals: Vec<RoadmapGoal>,
}
