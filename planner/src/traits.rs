//! Store trait definitions with mockall annotations for testing
//!
//! The catalog store and the profile store are the planner's only external
//! collaborators. Both are injected as trait objects/generics so the
//! pipeline can be exercised against mocks without a live backend.

use shared::{
    Claim, ClaimId, Clause, FactStatus, Goal, GoalId, Phase, ProgressEntry, Qualifier,
    Requirement, RequirementId, ScopeConstraint, Solution, SolutionId, Strategy, StoreResult,
    UserId, UserState,
};
use std::collections::HashMap;

/// Read operations the planner requires from the catalog
///
/// Empty results are valid for every operation except where noted; absence
/// of an entity is `Ok(None)`, distinct from a store failure.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// List goals, optionally filtered by lifecycle phase
    ///
    /// Ordered by phase then name (by name within a phase filter). The
    /// empty-catalog integrity check is the planner's responsibility, not
    /// the store's.
    async fn list_goals(&self, phase: Option<Phase>) -> StoreResult<Vec<Goal>>;

    /// Solutions that fulfill a goal, ordered by name; empty is valid
    async fn solutions_fulfilling(&self, goal_id: &GoalId) -> StoreResult<Vec<Solution>>;

    /// Identities of claims targeting a solution, ordered by id
    async fn claims_targeting(&self, solution_id: &SolutionId) -> StoreResult<Vec<ClaimId>>;

    /// Fetch a single claim; `None` when the claim does not exist
    async fn get_claim(&self, claim_id: &ClaimId) -> StoreResult<Option<Claim>>;

    /// Clauses the claim recommends; may legitimately be empty
    async fn clauses_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<Clause>>;

    /// Scope constraints the claim is scoped to; may legitimately be empty
    async fn scopes_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<ScopeConstraint>>;

    /// Qualifiers attached to the claim; may legitimately be empty
    async fn qualifiers_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<Qualifier>>;

    /// Batch-resolve requirement identities to full records
    ///
    /// Identities that do not resolve are simply absent from the result.
    async fn requirements_by_ids(
        &self,
        ids: &[RequirementId],
    ) -> StoreResult<Vec<Requirement>>;

    /// The goal's ranking strategy; `None` when the catalog is missing one
    async fn strategy_for(&self, goal_id: &GoalId) -> StoreResult<Option<Strategy>>;
}

/// Keyed CRUD over user state documents
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a user's state; `None` when the user does not exist
    async fn get_user_state(&self, user_id: &UserId) -> StoreResult<Option<UserState>>;

    /// Create a new user state document
    async fn create_user_state(&self, state: UserState) -> StoreResult<()>;

    /// Replace the user's scope map
    async fn update_scopes(
        &self,
        user_id: &UserId,
        scopes: HashMap<String, String>,
    ) -> StoreResult<()>;

    /// Replace the user's fact map
    async fn update_facts(
        &self,
        user_id: &UserId,
        facts: HashMap<RequirementId, FactStatus>,
    ) -> StoreResult<()>;

    /// Replace the user's progress log
    async fn update_progress(
        &self,
        user_id: &UserId,
        progress: Vec<ProgressEntry>,
    ) -> StoreResult<()>;

    /// Delete a user state document
    async fn delete_user_state(&self, user_id: &UserId) -> StoreResult<()>;
}
