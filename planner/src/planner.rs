//! Main planner implementation
//!
//! Drives the goal → solution → claim pipeline end to end: a single-pass
//! read-evaluate-filter over the catalog with the user's state held
//! immutable for the whole request. The caller gets either a complete
//! roadmap or an explicit failure; there is no partial or degraded result.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::core::{GraphletAssembler, RequirementChecker, ScopeValidator, StrategyRanker};
use crate::error::{PlannerError, PlannerResult};
use crate::traits::{CatalogStore, ProfileStore};
use shared::{
    Goal, Graphlet, Phase, Roadmap, RoadmapGoal, RoadmapSolution, Solution, UserId, UserState,
};

/// A solution that survived claim gating, pending ranking
struct ViableSolution {
    solution: Solution,
    viable_claims: Vec<Graphlet>,
    strategy_ranking: usize,
    user_rationale: String,
}

/// Roadmap planner over injected catalog and profile stores
pub struct Planner<C, P>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    catalog: Arc<C>,
    profiles: Arc<P>,
    assembler: GraphletAssembler<C>,
    scope_validator: ScopeValidator,
    requirement_checker: RequirementChecker,
}

impl<C, P> Planner<C, P>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    /// Create a new planner with injected store dependencies
    pub fn new(catalog: Arc<C>, profiles: Arc<P>) -> Self {
        let assembler = GraphletAssembler::new(Arc::clone(&catalog));
        Self {
            catalog,
            profiles,
            assembler,
            scope_validator: ScopeValidator::new(),
            requirement_checker: RequirementChecker::new(),
        }
    }

    /// The profile store, for user-state CRUD at the service boundary
    pub fn profiles(&self) -> &Arc<P> {
        &self.profiles
    }

    /// The graphlet assembler, for per-claim detail lookups
    pub fn assembler(&self) -> &GraphletAssembler<C> {
        &self.assembler
    }

    /// Compute a roadmap for a stored user
    ///
    /// Fetches the user's state once; `UserNotFound` when the profile
    /// store has no document for the id.
    pub async fn roadmap_for_user(
        &self,
        user_id: &UserId,
        phase: Option<Phase>,
    ) -> PlannerResult<Roadmap> {
        let user_state = self
            .profiles
            .get_user_state(user_id)
            .await?
            .ok_or_else(|| PlannerError::UserNotFound {
                user_id: user_id.to_string(),
            })?;
        self.roadmap(&user_state, phase).await
    }

    /// Compute a prioritized roadmap of achievable goals
    ///
    /// Algorithm:
    /// 1. Load all goals (optionally phase-filtered); empty is a
    ///    data-integrity failure.
    /// 2. Per goal, load fulfilling solutions; none prunes the goal.
    /// 3. Per solution, load targeting claims; none prunes the solution.
    /// 4. Per claim, assemble the graphlet and gate it on scopes, then on
    ///    requirements. A requirement-integrity failure aborts the whole
    ///    run.
    /// 5. A solution survives with at least one viable claim; a goal
    ///    survives with at least one viable solution.
    /// 6. Rank surviving solutions by the goal's strategy, ascending.
    pub async fn roadmap(
        &self,
        user_state: &UserState,
        phase: Option<Phase>,
    ) -> PlannerResult<Roadmap> {
        info!(
            user = %user_state.user_id,
            scopes = user_state.scopes.len(),
            facts = user_state.facts.len(),
            phase = phase.map(|p| p.as_str()).unwrap_or("all"),
            "Planning roadmap"
        );

        let all_goals = self.catalog.list_goals(phase).await?;
        if all_goals.is_empty() {
            return Err(match phase {
                Some(phase) => PlannerError::NoGoalsForPhase {
                    phase: phase.to_string(),
                },
                None => PlannerError::NoGoals,
            });
        }
        debug!(total = all_goals.len(), "Loaded goals from catalog");

        let mut viable_goals = Vec::new();
        for goal in all_goals {
            if let Some(road_goal) = self.evaluate_goal(&goal, user_state).await? {
                viable_goals.push(road_goal);
            }
        }

        info!(
            user = %user_state.user_id,
            viable_goals = viable_goals.len(),
            "Roadmap complete"
        );

        Ok(Roadmap {
            user_id: user_state.user_id.clone(),
            generated_at: Utc::now(),
            total_goals: viable_goals.len(),
            goals: viable_goals,
        })
    }

    /// Evaluate one goal; `None` when it is pruned
    async fn evaluate_goal(
        &self,
        goal: &Goal,
        user_state: &UserState,
    ) -> PlannerResult<Option<RoadmapGoal>> {
        let solutions = self.catalog.solutions_fulfilling(&goal.id).await?;
        if solutions.is_empty() {
            debug!(goal = %goal.id, "Pruned goal: no solutions");
            return Ok(None);
        }

        let mut viable_solutions = Vec::new();
        for solution in solutions {
            if let Some(viable) = self.evaluate_solution(solution, user_state).await? {
                viable_solutions.push(viable);
            }
        }

        if viable_solutions.is_empty() {
            debug!(goal = %goal.id, "Pruned goal: no viable solutions");
            return Ok(None);
        }

        // Rank by the goal's strategy; unranked solutions tie last and keep
        // discovery order (stable sort)
        let strategy = self.catalog.strategy_for(&goal.id).await?;
        if strategy.is_none() {
            warn!(goal = %goal.id, "No strategy found for goal, using default ranking");
        }
        let (ranking_rules, user_rationale) = StrategyRanker::ranking_inputs(strategy);
        for viable in &mut viable_solutions {
            viable.strategy_ranking = StrategyRanker::rank(&ranking_rules, &viable.solution.id);
            viable.user_rationale = user_rationale.clone();
        }
        viable_solutions.sort_by_key(|viable| viable.strategy_ranking);

        info!(
            goal = %goal.id,
            name = %goal.name,
            viable_solutions = viable_solutions.len(),
            "Goal accepted"
        );

        Ok(Some(RoadmapGoal {
            goal_id: goal.id.clone(),
            goal_name: goal.name.clone(),
            goal_phase: goal.phase,
            goal_description: goal.description.clone(),
            solutions: viable_solutions
                .into_iter()
                .map(|viable| RoadmapSolution {
                    solution_id: viable.solution.id,
                    solution_name: viable.solution.name,
                    solution_description: viable.solution.description,
                    strategy_ranking: viable.strategy_ranking,
                    user_rationale: viable.user_rationale,
                    assessed_claims_count: viable.viable_claims.len(),
                })
                .collect(),
        }))
    }

    /// Evaluate one solution; `None` when it is pruned
    async fn evaluate_solution(
        &self,
        solution: Solution,
        user_state: &UserState,
    ) -> PlannerResult<Option<ViableSolution>> {
        let claim_ids = self.catalog.claims_targeting(&solution.id).await?;
        if claim_ids.is_empty() {
            debug!(solution = %solution.id, "Pruned solution: no claims");
            return Ok(None);
        }

        let mut viable_claims = Vec::new();
        for claim_id in claim_ids {
            let Some(graphlet) = self.assembler.assemble(&claim_id).await? else {
                debug!(claim = %claim_id, "Pruned claim: no graphlet data");
                continue;
            };

            if !self
                .scope_validator
                .is_viable(&user_state.scopes, &graphlet.scopes)
            {
                debug!(claim = %claim_id, "Pruned claim: scope mismatch");
                continue;
            }

            // May abort the entire run on an untracked requirement
            if !self
                .requirement_checker
                .is_viable(&user_state.facts, &graphlet.requirements)?
            {
                debug!(claim = %claim_id, "Pruned claim: requirements not met");
                continue;
            }

            debug!(claim = %claim_id, "Claim viable");
            viable_claims.push(graphlet);
        }

        if viable_claims.is_empty() {
            debug!(solution = %solution.id, "Pruned solution: no viable claims");
            return Ok(None);
        }

        debug!(
            solution = %solution.id,
            claims = viable_claims.len(),
            "Solution viable"
        );
        Ok(Some(ViableSolution {
            solution,
            viable_claims,
            strategy_ranking: 0,
            user_rationale: String::new(),
        }))
    }
}
