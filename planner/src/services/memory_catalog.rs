//! In-memory catalog store
//!
//! An immutable snapshot of the solution catalog, loaded from a JSON
//! document produced by the catalog seeding pipeline. The snapshot is the
//! queryable stand-in for the external graph store: it exposes the same
//! read operations and the same ordering contracts, and the planner never
//! sees the difference.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::traits::CatalogStore;
use shared::{
    Claim, ClaimId, Clause, Goal, GoalId, Phase, Qualifier, Requirement, RequirementId,
    ScopeConstraint, Solution, SolutionId, Strategy, StoreError, StoreResult,
};

/// One claim record in the catalog document, with its target edge
#[derive(Debug, Deserialize)]
struct ClaimRecord {
    /// The solution this claim targets
    solution_id: SolutionId,
    #[serde(flatten)]
    claim: Claim,
}

#[derive(Debug, Deserialize)]
struct ClauseRecord {
    claim_id: ClaimId,
    #[serde(flatten)]
    clause: Clause,
}

#[derive(Debug, Deserialize)]
struct ScopeRecord {
    claim_id: ClaimId,
    #[serde(flatten)]
    scope: ScopeConstraint,
}

#[derive(Debug, Deserialize)]
struct QualifierRecord {
    claim_id: ClaimId,
    #[serde(flatten)]
    qualifier: Qualifier,
}

#[derive(Debug, Deserialize)]
struct StrategyRecord {
    goal_id: GoalId,
    #[serde(flatten)]
    strategy: Strategy,
}

#[derive(Debug, Deserialize)]
struct FulfillsRecord {
    solution_id: SolutionId,
    goal_id: GoalId,
}

/// Serialized catalog snapshot: entity tables plus relation tables
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    goals: Vec<Goal>,
    solutions: Vec<Solution>,
    fulfills: Vec<FulfillsRecord>,
    claims: Vec<ClaimRecord>,
    clauses: Vec<ClauseRecord>,
    scopes: Vec<ScopeRecord>,
    qualifiers: Vec<QualifierRecord>,
    requirements: Vec<Requirement>,
    strategies: Vec<StrategyRecord>,
}

/// Immutable in-memory catalog snapshot
#[derive(Debug)]
pub struct MemoryCatalog {
    goals: Vec<Goal>,
    solutions_by_goal: HashMap<GoalId, Vec<Solution>>,
    claims_by_solution: HashMap<SolutionId, Vec<ClaimId>>,
    claims: HashMap<ClaimId, Claim>,
    clauses: HashMap<ClaimId, Vec<Clause>>,
    scopes: HashMap<ClaimId, Vec<ScopeConstraint>>,
    qualifiers: HashMap<ClaimId, Vec<Qualifier>>,
    requirements: HashMap<RequirementId, Requirement>,
    strategies: HashMap<GoalId, Strategy>,
}

impl MemoryCatalog {
    /// Build a catalog from a parsed document, indexing the relations
    pub fn from_document(document: CatalogDocument) -> Self {
        let mut goals = document.goals;
        goals.sort_by(|a, b| a.phase.cmp(&b.phase).then_with(|| a.name.cmp(&b.name)));

        let solutions: HashMap<SolutionId, Solution> = document
            .solutions
            .into_iter()
            .map(|solution| (solution.id.clone(), solution))
            .collect();

        let mut solutions_by_goal: HashMap<GoalId, Vec<Solution>> = HashMap::new();
        for edge in document.fulfills {
            if let Some(solution) = solutions.get(&edge.solution_id) {
                solutions_by_goal
                    .entry(edge.goal_id)
                    .or_default()
                    .push(solution.clone());
            }
        }
        for goal_solutions in solutions_by_goal.values_mut() {
            goal_solutions.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut claims_by_solution: HashMap<SolutionId, Vec<ClaimId>> = HashMap::new();
        let mut claims = HashMap::new();
        for record in document.claims {
            claims_by_solution
                .entry(record.solution_id)
                .or_default()
                .push(record.claim.id.clone());
            claims.insert(record.claim.id.clone(), record.claim);
        }
        for claim_ids in claims_by_solution.values_mut() {
            claim_ids.sort();
        }

        let mut clauses: HashMap<ClaimId, Vec<Clause>> = HashMap::new();
        for record in document.clauses {
            clauses.entry(record.claim_id).or_default().push(record.clause);
        }
        let mut scopes: HashMap<ClaimId, Vec<ScopeConstraint>> = HashMap::new();
        for record in document.scopes {
            scopes.entry(record.claim_id).or_default().push(record.scope);
        }
        let mut qualifiers: HashMap<ClaimId, Vec<Qualifier>> = HashMap::new();
        for record in document.qualifiers {
            qualifiers
                .entry(record.claim_id)
                .or_default()
                .push(record.qualifier);
        }

        let requirements = document
            .requirements
            .into_iter()
            .map(|requirement| (requirement.id.clone(), requirement))
            .collect();
        let strategies = document
            .strategies
            .into_iter()
            .map(|record| (record.goal_id, record.strategy))
            .collect();

        Self {
            goals,
            solutions_by_goal,
            claims_by_solution,
            claims,
            clauses,
            scopes,
            qualifiers,
            requirements,
            strategies,
        }
    }

    /// Load a catalog snapshot from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                context: format!("reading catalog {}", path.display()),
                source,
            })?;
        let document: CatalogDocument =
            serde_json::from_str(&raw).map_err(|source| StoreError::MalformedDocument {
                context: format!("parsing catalog {}", path.display()),
                source,
            })?;
        Ok(Self::from_document(document))
    }

    /// Parse a catalog snapshot from a JSON string
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(raw).map_err(|source| StoreError::MalformedDocument {
                context: "parsing catalog document".to_string(),
                source,
            })?;
        Ok(Self::from_document(document))
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_goals(&self, phase: Option<Phase>) -> StoreResult<Vec<Goal>> {
        Ok(match phase {
            Some(phase) => self
                .goals
                .iter()
                .filter(|goal| goal.phase == phase)
                .cloned()
                .collect(),
            None => self.goals.clone(),
        })
    }

    async fn solutions_fulfilling(&self, goal_id: &GoalId) -> StoreResult<Vec<Solution>> {
        Ok(self.solutions_by_goal.get(goal_id).cloned().unwrap_or_default())
    }

    async fn claims_targeting(&self, solution_id: &SolutionId) -> StoreResult<Vec<ClaimId>> {
        Ok(self
            .claims_by_solution
            .get(solution_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_claim(&self, claim_id: &ClaimId) -> StoreResult<Option<Claim>> {
        Ok(self.claims.get(claim_id).cloned())
    }

    async fn clauses_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<Clause>> {
        Ok(self.clauses.get(claim_id).cloned().unwrap_or_default())
    }

    async fn scopes_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<ScopeConstraint>> {
        Ok(self.scopes.get(claim_id).cloned().unwrap_or_default())
    }

    async fn qualifiers_for(&self, claim_id: &ClaimId) -> StoreResult<Vec<Qualifier>> {
        Ok(self.qualifiers.get(claim_id).cloned().unwrap_or_default())
    }

    async fn requirements_by_ids(
        &self,
        ids: &[RequirementId],
    ) -> StoreResult<Vec<Requirement>> {
        // Unresolvable ids are dropped, preserving input order for the rest
        Ok(ids
            .iter()
            .filter_map(|id| self.requirements.get(id).cloned())
            .collect())
    }

    async fn strategy_for(&self, goal_id: &GoalId) -> StoreResult<Option<Strategy>> {
        Ok(self.strategies.get(goal_id).cloned())
    }
}
