//! Graphlet assembly
//!
//! A graphlet is the per-claim bundle of everything viability evaluation
//! needs: the claim itself, its recommended clauses, its scope
//! constraints, its qualifiers, and the requirement records referenced by
//! the clause logic trees. It is assembled fresh on every evaluation; the
//! catalog can change between requests in a long-running process, so
//! nothing here is cached.

use crate::core::logic_tree::LogicTreeEvaluator;
use crate::error::PlannerResult;
use crate::traits::CatalogStore;
use shared::{ClaimId, Graphlet, RequirementId};
use std::collections::HashSet;
use std::sync::Arc;

/// Assembles per-claim dependency bundles from fine-grained store reads
pub struct GraphletAssembler<C: CatalogStore> {
    catalog: Arc<C>,
}

impl<C: CatalogStore> GraphletAssembler<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Assemble the complete graphlet for a claim
    ///
    /// Returns `Ok(None)` when the claim does not exist, which is distinct
    /// from a claim that exists with empty dependencies. Requirement
    /// identities that do not resolve to catalog records are dropped, not
    /// errors: a clause may reference requirements pruned from the
    /// catalog.
    pub async fn assemble(&self, claim_id: &ClaimId) -> PlannerResult<Option<Graphlet>> {
        let Some(claim) = self.catalog.get_claim(claim_id).await? else {
            return Ok(None);
        };

        let clauses = self.catalog.clauses_for(claim_id).await?;
        let scopes = self.catalog.scopes_for(claim_id).await?;
        let qualifiers = self.catalog.qualifiers_for(claim_id).await?;

        let mut requirement_ids: HashSet<RequirementId> = HashSet::new();
        for clause in &clauses {
            requirement_ids
                .extend(LogicTreeEvaluator::referenced_requirements(&clause.logic_tree));
        }

        let requirements = if requirement_ids.is_empty() {
            Vec::new()
        } else {
            let mut ids: Vec<RequirementId> = requirement_ids.into_iter().collect();
            ids.sort();
            self.catalog.requirements_by_ids(&ids).await?
        };

        Ok(Some(Graphlet {
            claim,
            clauses,
            scopes,
            qualifiers,
            requirements,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockCatalogStore;
    use shared::{Claim, Clause, Requirement, RequirementType};

    fn claim(id: &str) -> Claim {
        Claim {
            id: ClaimId::new(id),
            name: format!("claim {id}"),
            outcome: "reachable".to_string(),
            rationale: String::new(),
            confidence: "high".to_string(),
            source: String::new(),
            authority: String::new(),
            date: String::new(),
        }
    }

    fn requirement(id: &str) -> Requirement {
        Requirement {
            id: RequirementId::new(id),
            name: id.to_string(),
            requirement_type: RequirementType::Eligibility,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_claim_yields_none() {
        let mut catalog = MockCatalogStore::new();
        catalog.expect_get_claim().returning(|_| Ok(None));

        let assembler = GraphletAssembler::new(Arc::new(catalog));
        let result = assembler.assemble(&ClaimId::new("ac_missing")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_assembles_full_bundle() {
        let mut catalog = MockCatalogStore::new();
        catalog
            .expect_get_claim()
            .returning(|id| Ok(Some(claim(id.as_str()))));
        catalog.expect_clauses_for().returning(|_| {
            Ok(vec![Clause {
                id: "cl_1".to_string(),
                logic_tree: r#"{"op": "AND", "children": [
                    {"op": "has", "id": "req_a"},
                    {"op": "has", "id": "req_b"}
                ]}"#
                .to_string(),
            }])
        });
        catalog.expect_scopes_for().returning(|_| Ok(Vec::new()));
        catalog.expect_qualifiers_for().returning(|_| Ok(Vec::new()));
        catalog.expect_requirements_by_ids().returning(|ids| {
            Ok(ids.iter().map(|id| requirement(id.as_str())).collect())
        });

        let assembler = GraphletAssembler::new(Arc::new(catalog));
        let graphlet = assembler
            .assemble(&ClaimId::new("ac_1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(graphlet.claim.id, ClaimId::new("ac_1"));
        assert_eq!(graphlet.clauses.len(), 1);
        assert_eq!(graphlet.requirements.len(), 2);
    }

    #[tokio::test]
    async fn test_unresolvable_requirement_ids_are_dropped() {
        let mut catalog = MockCatalogStore::new();
        catalog
            .expect_get_claim()
            .returning(|id| Ok(Some(claim(id.as_str()))));
        catalog.expect_clauses_for().returning(|_| {
            Ok(vec![Clause {
                id: "cl_1".to_string(),
                logic_tree: r#"{"op": "OR", "children": [
                    {"op": "has", "id": "req_known"},
                    {"op": "has", "id": "req_gone"}
                ]}"#
                .to_string(),
            }])
        });
        catalog.expect_scopes_for().returning(|_| Ok(Vec::new()));
        catalog.expect_qualifiers_for().returning(|_| Ok(Vec::new()));
        // Only one of the two referenced ids still resolves
        catalog
            .expect_requirements_by_ids()
            .returning(|_| Ok(vec![requirement("req_known")]));

        let assembler = GraphletAssembler::new(Arc::new(catalog));
        let graphlet = assembler
            .assemble(&ClaimId::new("ac_1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graphlet.requirements.len(), 1);
        assert_eq!(graphlet.requirements[0].id, RequirementId::new("req_known"));
    }

    #[tokio::test]
    async fn test_claim_with_no_dependencies_is_empty_bundle() {
        let mut catalog = MockCatalogStore::new();
        catalog
            .expect_get_claim()
            .returning(|id| Ok(Some(claim(id.as_str()))));
        catalog.expect_clauses_for().returning(|_| Ok(Vec::new()));
        catalog.expect_scopes_for().returning(|_| Ok(Vec::new()));
        catalog.expect_qualifiers_for().returning(|_| Ok(Vec::new()));
        // No clauses means no requirement lookup at all
        catalog.expect_requirements_by_ids().never();

        let assembler = GraphletAssembler::new(Arc::new(catalog));
        let graphlet = assembler
            .assemble(&ClaimId::new("ac_bare"))
            .await
            .unwrap()
            .unwrap();
        assert!(graphlet.clauses.is_empty());
        assert!(graphlet.requirements.is_empty());
    }
}
