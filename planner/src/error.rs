//! Planner-specific error types
//!
//! The taxonomy separates expected absence (`UserNotFound`, and `Option`
//! returns elsewhere) from data-integrity violations (`NoGoals`,
//! `UntrackedRequirement`) and store failures. Gate mismatches during
//! viability checking are ordinary `bool` control flow, not errors.

use shared::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("User {user_id} not found")]
    UserNotFound { user_id: String },

    #[error("No goals found in catalog - system not properly initialized")]
    NoGoals,

    #[error("No goals found for phase '{phase}' - check goal seeding")]
    NoGoalsForPhase { phase: String },

    #[error("Required capability '{name}' ({requirement_id}) not tracked in user facts - system error")]
    UntrackedRequirement {
        requirement_id: String,
        name: String,
    },

    #[error("Store failure")]
    Store(#[from] StoreError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    /// Whether this error is a data-integrity violation rather than an
    /// infrastructure failure or expected absence
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            PlannerError::NoGoals
                | PlannerError::NoGoalsForPhase { .. }
                | PlannerError::UntrackedRequirement { .. }
        )
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
