//! Scope viability checking
//!
//! Seven scope dimensions (state, nationality, visa_type, age,
//! credit_score, asset_band, previous_residence) must match exactly when a
//! claim constrains them; `provider` is a user choice and never gates.
//! Matching is always exact string equality: no hierarchies, no partial
//! match, no case normalization.

use serde::Serialize;
use shared::{ScopeConstraint, ScopeType};
use std::collections::HashMap;

/// A constraint the user does not satisfy, for diagnostics/UX
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissingScope {
    pub scope_type: String,
    pub required_value: String,
    /// The user's current value, or `missing` when the dimension is unset
    pub user_value: String,
}

/// Validates user scopes against claim scope constraints
pub struct ScopeValidator;

impl ScopeValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check whether the user satisfies every constraint on a claim
    ///
    /// An empty constraint list means the claim applies universally.
    /// Constraints with an unknown dimension or missing fields are skipped,
    /// never treated as failures. Short-circuits false on the first
    /// required-dimension mismatch.
    pub fn is_viable(
        &self,
        user_scopes: &HashMap<String, String>,
        constraints: &[ScopeConstraint],
    ) -> bool {
        for constraint in constraints {
            let Some(scope_type) = Self::classify(constraint) else {
                continue;
            };
            if !scope_type.is_required() {
                continue;
            }

            match user_scopes.get(&constraint.scope_type) {
                None => {
                    tracing::debug!(
                        scope_type = %scope_type,
                        required = %constraint.value,
                        "Scope check failed: user missing dimension"
                    );
                    return false;
                }
                Some(user_value) if user_value.is_empty() => {
                    tracing::debug!(
                        scope_type = %scope_type,
                        required = %constraint.value,
                        "Scope check failed: user dimension empty"
                    );
                    return false;
                }
                Some(user_value) if user_value != &constraint.value => {
                    tracing::debug!(
                        scope_type = %scope_type,
                        user = %user_value,
                        required = %constraint.value,
                        "Scope check failed: value mismatch"
                    );
                    return false;
                }
                Some(_) => {}
            }
        }
        true
    }

    /// Every failing constraint, with the user's current value
    ///
    /// Diagnostics only; gating goes through [`Self::is_viable`].
    pub fn missing_scopes(
        &self,
        user_scopes: &HashMap<String, String>,
        constraints: &[ScopeConstraint],
    ) -> Vec<MissingScope> {
        let mut missing = Vec::new();

        for constraint in constraints {
            let Some(scope_type) = Self::classify(constraint) else {
                continue;
            };
            if !scope_type.is_required() {
                continue;
            }

            let user_value = user_scopes
                .get(&constraint.scope_type)
                .filter(|value| !value.is_empty());
            if user_value != Some(&constraint.value) {
                missing.push(MissingScope {
                    scope_type: constraint.scope_type.clone(),
                    required_value: constraint.value.clone(),
                    user_value: user_value.cloned().unwrap_or_else(|| "missing".to_string()),
                });
            }
        }

        missing
    }

    /// Classify a constraint's dimension; `None` for malformed or unknown
    /// entries, which are skipped
    fn classify(constraint: &ScopeConstraint) -> Option<ScopeType> {
        if constraint.scope_type.is_empty() || constraint.value.is_empty() {
            return None;
        }
        ScopeType::from_str(&constraint.scope_type)
    }
}

impl Default for ScopeValidator {
    fn default() -> Self {
        Self::new()
    }
}
