//! Requirement viability checking
//!
//! A claim's referenced requirements are viable only when the user's fact
//! map records the literal status `have` for every one of them. A
//! requirement the user does not track at all is a data-integrity error:
//! the profile seeding guarantees a status for every catalog requirement,
//! so an untracked id means the system is broken, and the check fails
//! loudly rather than defaulting.

use crate::error::{PlannerError, PlannerResult};
use serde::Serialize;
use shared::{FactStatus, Requirement, RequirementId};
use std::collections::HashMap;

/// A requirement the user does not satisfy, for diagnostics/UX
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissingRequirement {
    pub requirement_id: RequirementId,
    pub name: String,
    /// The tracked status, or `unknown` when the id is untracked
    pub status: String,
}

/// Checks user capability facts against a claim's flattened requirements
pub struct RequirementChecker;

impl RequirementChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check whether the user has every listed requirement
    ///
    /// An empty requirement list is viable. Short-circuits `Ok(false)` on
    /// the first non-`have` status. An untracked requirement id is an
    /// [`PlannerError::UntrackedRequirement`] integrity failure.
    pub fn is_viable(
        &self,
        user_facts: &HashMap<RequirementId, FactStatus>,
        requirements: &[Requirement],
    ) -> PlannerResult<bool> {
        for requirement in requirements {
            match user_facts.get(&requirement.id) {
                None => {
                    return Err(PlannerError::UntrackedRequirement {
                        requirement_id: requirement.id.to_string(),
                        name: requirement.name.clone(),
                    });
                }
                Some(status) if !status.is_have() => {
                    tracing::debug!(
                        requirement = %requirement.id,
                        name = %requirement.name,
                        status = %status,
                        "Requirement check failed: status is not 'have'"
                    );
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        Ok(true)
    }

    /// Requirements the user does not have, including untracked ones
    ///
    /// Diagnostics only: untracked ids are reported with status `unknown`
    /// instead of raising.
    pub fn missing_requirements(
        &self,
        user_facts: &HashMap<RequirementId, FactStatus>,
        requirements: &[Requirement],
    ) -> Vec<MissingRequirement> {
        requirements
            .iter()
            .filter_map(|requirement| {
                let status = user_facts
                    .get(&requirement.id)
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                if status == "have" {
                    None
                } else {
                    Some(MissingRequirement {
                        requirement_id: requirement.id.clone(),
                        name: requirement.name.clone(),
                        status,
                    })
                }
            })
            .collect()
    }

    /// All requirement ids the user has marked as blocked
    pub fn blocked_requirements(
        &self,
        user_facts: &HashMap<RequirementId, FactStatus>,
    ) -> Vec<RequirementId> {
        let mut blocked: Vec<RequirementId> = user_facts
            .iter()
            .filter(|(_, status)| **status == FactStatus::Blocked)
            .map(|(id, _)| id.clone())
            .collect();
        blocked.sort();
        blocked
    }
}

impl Default for RequirementChecker {
    fn default() -> Self {
        Self::new()
    }
}
