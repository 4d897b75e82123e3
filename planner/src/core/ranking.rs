//! Strategy-based solution ranking
//!
//! Each goal carries one strategy whose `ranking_rules` list solution
//! identities in priority order. Rank is the list position (0 = best);
//! unranked solutions all tie at the list length and stay in discovery
//! order.

use shared::{SolutionId, Strategy};

/// Notice used in place of a rationale when a goal has no strategy
pub const DEFAULT_RANKING_RATIONALE: &str = "Strategy data not available - using default ranking";

/// Orders viable solutions by a goal's strategy
pub struct StrategyRanker;

impl StrategyRanker {
    /// Rank of a solution within the ranking rules
    pub fn rank(ranking_rules: &[SolutionId], solution_id: &SolutionId) -> usize {
        ranking_rules
            .iter()
            .position(|ranked| ranked == solution_id)
            .unwrap_or(ranking_rules.len())
    }

    /// Resolve a possibly-missing strategy into ranking inputs
    ///
    /// A missing strategy violates the one-strategy-per-goal invariant;
    /// the run proceeds with default ranking and the caller is expected to
    /// have logged the anomaly (see DESIGN.md).
    pub fn ranking_inputs(strategy: Option<Strategy>) -> (Vec<SolutionId>, String) {
        match strategy {
            Some(strategy) => (strategy.ranking_rules, strategy.user_rationale),
            None => (Vec::new(), DEFAULT_RANKING_RATIONALE.to_string()),
        }
    }
}
