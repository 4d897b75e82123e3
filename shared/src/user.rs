//! User state as held by the profile store
//!
//! Fetched once per roadmap request and treated as immutable for the
//! duration of that request.

use crate::types::{RequirementId, SolutionId, UserId};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Status of a requirement in a user's fact map
///
/// Viability requires the literal `have`; anything else, including values
/// this build does not recognize, is not viable. Unrecognized strings are
/// preserved rather than rejected so profile documents written by newer
/// builds still deserialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactStatus {
    Have,
    Need,
    Blocked,
    Other(String),
}

impl FactStatus {
    pub fn from_str(s: &str) -> Self {
        match s {
            "have" => FactStatus::Have,
            "need" => FactStatus::Need,
            "blocked" => FactStatus::Blocked,
            other => FactStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FactStatus::Have => "have",
            FactStatus::Need => "need",
            FactStatus::Blocked => "blocked",
            FactStatus::Other(s) => s,
        }
    }

    pub fn is_have(&self) -> bool {
        matches!(self, FactStatus::Have)
    }
}

impl fmt::Display for FactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FactStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FactStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusVisitor;

        impl<'de> Visitor<'de> for StatusVisitor {
            type Value = FactStatus;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a fact status string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<FactStatus, E> {
                Ok(FactStatus::from_str(value))
            }
        }

        deserializer.deserialize_str(StatusVisitor)
    }
}

/// One attempted/completed solution in the user's history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub solution_id: SolutionId,
    pub status: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub notes: String,
}

/// User preferences that shape (but do not gate) planning
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub deprioritized_goals: Vec<String>,
}

/// Complete user state document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub user_id: UserId,
    #[serde(default)]
    pub basic_info: serde_json::Value,
    /// Scope values keyed by dimension name (state, visa_type, ...)
    #[serde(default)]
    pub scopes: HashMap<String, String>,
    /// Requirement statuses keyed by requirement identity
    #[serde(default)]
    pub facts: HashMap<RequirementId, FactStatus>,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
    #[serde(default)]
    pub timeline: HashMap<String, String>,
    #[serde(default)]
    pub preferences: Preferences,
}
