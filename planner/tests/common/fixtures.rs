//! Test fixtures and data for planner tests
//!
//! Catalog snapshots and user states used across the test suites. The
//! canonical scenario is one BUILD-phase goal ("Build credit history")
//! with a secured-card solution whose claim is scoped to a state and
//! requires an SSN.

use shared::{FactStatus, RequirementId, UserId, UserState};
use std::collections::HashMap;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const USER_ID: &'static str = "u_test_123";

    /// All seven required scope dimensions, CA/H-1B profile
    pub fn full_user_scopes() -> HashMap<String, String> {
        [
            ("state", "CA"),
            ("nationality", "CH"),
            ("visa_type", "H-1B"),
            ("age", "21_65"),
            ("credit_score", "no_credit"),
            ("asset_band", "100k_1m"),
            ("previous_residence", "CH"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// User with every referenced requirement satisfied
    pub fn user_state_all_have() -> UserState {
        Self::user_state_with_facts(
            [
                ("req_ssn", FactStatus::Have),
                ("req_address_proof", FactStatus::Have),
                ("req_passport", FactStatus::Have),
            ]
            .into_iter()
            .map(|(id, status)| (RequirementId::new(id), status))
            .collect(),
        )
    }

    /// User whose SSN is still pending
    pub fn user_state_needs_ssn() -> UserState {
        Self::user_state_with_facts(
            [
                ("req_ssn", FactStatus::Need),
                ("req_address_proof", FactStatus::Have),
                ("req_passport", FactStatus::Have),
            ]
            .into_iter()
            .map(|(id, status)| (RequirementId::new(id), status))
            .collect(),
        )
    }

    pub fn user_state_with_facts(facts: HashMap<RequirementId, FactStatus>) -> UserState {
        UserState {
            user_id: UserId::new(Self::USER_ID),
            basic_info: serde_json::json!({"name": "John Doe"}),
            scopes: Self::full_user_scopes(),
            facts,
            progress: Vec::new(),
            timeline: [("arrival_date", "2025-08-15")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            preferences: Default::default(),
        }
    }

    /// Single goal/solution/claim catalog; the claim is scoped to the
    /// given state and requires req_ssn
    pub fn single_claim_catalog(claim_state: &str) -> String {
        format!(
            r#"{{
                "goals": [
                    {{"id": "goal_credit", "name": "Build credit history", "phase": "BUILD",
                      "description": "Establish a US credit file"}}
                ],
                "solutions": [
                    {{"id": "sol_secured_card", "name": "Secured credit card"}}
                ],
                "fulfills": [
                    {{"solution_id": "sol_secured_card", "goal_id": "goal_credit"}}
                ],
                "claims": [
                    {{"solution_id": "sol_secured_card", "id": "ac_1",
                      "name": "Secured card with SSN", "outcome": "reachable",
                      "confidence": "high", "source": "provider terms",
                      "authority": "issuer", "date": "2025-06-01"}}
                ],
                "clauses": [
                    {{"claim_id": "ac_1", "id": "cl_1",
                      "logic_tree": "{{\"op\": \"has\", \"id\": \"req_ssn\"}}"}}
                ],
                "scopes": [
                    {{"claim_id": "ac_1", "id": "scope_1",
                      "scope_type": "state", "value": "{claim_state}"}}
                ],
                "requirements": [
                    {{"id": "req_ssn", "name": "Social Security Number", "type": "document"}}
                ],
                "strategies": [
                    {{"goal_id": "goal_credit", "ranking_rules": ["sol_secured_card"],
                      "user_rationale": "Secured cards are the fastest primer",
                      "confidence": "high"}}
                ]
            }}"#
        )
    }

    /// Two ranked solutions plus one unranked, all with viable claims;
    /// exercises strategy ordering and the unranked tie
    pub fn ranked_catalog() -> &'static str {
        r#"{
            "goals": [
                {"id": "goal_credit", "name": "Build credit history", "phase": "BUILD"}
            ],
            "solutions": [
                {"id": "sol_a", "name": "Authorized user"},
                {"id": "sol_b", "name": "Builder loan"},
                {"id": "sol_c", "name": "Co-signed card"}
            ],
            "fulfills": [
                {"solution_id": "sol_a", "goal_id": "goal_credit"},
                {"solution_id": "sol_b", "goal_id": "goal_credit"},
                {"solution_id": "sol_c", "goal_id": "goal_credit"}
            ],
            "claims": [
                {"solution_id": "sol_a", "id": "ac_a"},
                {"solution_id": "sol_b", "id": "ac_b"},
                {"solution_id": "sol_c", "id": "ac_c"}
            ],
            "strategies": [
                {"goal_id": "goal_credit", "ranking_rules": ["sol_b", "sol_a"],
                 "user_rationale": "Builder loans report to all bureaus"}
            ]
        }"#
    }

    /// A goal whose strategy row is missing from the catalog
    pub fn missing_strategy_catalog() -> &'static str {
        r#"{
            "goals": [
                {"id": "goal_bank", "name": "Open a bank account", "phase": "ARRIVE"}
            ],
            "solutions": [
                {"id": "sol_checking", "name": "Basic checking account"}
            ],
            "fulfills": [
                {"solution_id": "sol_checking", "goal_id": "goal_bank"}
            ],
            "claims": [
                {"solution_id": "sol_checking", "id": "ac_chk"}
            ]
        }"#
    }

    /// Goals across two phases, each with one trivially viable solution
    pub fn two_phase_catalog() -> &'static str {
        r#"{
            "goals": [
                {"id": "goal_bank", "name": "Open a bank account", "phase": "ARRIVE"},
                {"id": "goal_credit", "name": "Build credit history", "phase": "BUILD"}
            ],
            "solutions": [
                {"id": "sol_checking", "name": "Basic checking account"},
                {"id": "sol_secured_card", "name": "Secured credit card"}
            ],
            "fulfills": [
                {"solution_id": "sol_checking", "goal_id": "goal_bank"},
                {"solution_id": "sol_secured_card", "goal_id": "goal_credit"}
            ],
            "claims": [
                {"solution_id": "sol_checking", "id": "ac_chk"},
                {"solution_id": "sol_secured_card", "id": "ac_card"}
            ],
            "strategies": [
                {"goal_id": "goal_bank", "ranking_rules": ["sol_checking"]},
                {"goal_id": "goal_credit", "ranking_rules": ["sol_secured_card"]}
            ]
        }"#
    }

    /// Empty catalog document
    pub fn empty_catalog() -> &'static str {
        "{}"
    }
}
