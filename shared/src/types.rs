//! Catalog entity model and identifiers
//!
//! Catalog identities are human-readable slugs assigned at seeding time
//! (e.g. `goal_credit_card`, `req.elig.ssn`), so identifiers are string
//! newtypes rather than UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for goals
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for solutions
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolutionId(String);

impl SolutionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for assessed claims
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for requirements
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementId(String);

impl RequirementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for users
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase a goal belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Prep,
    Arrive,
    Build,
    Thrive,
}

impl Phase {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PREP" => Some(Phase::Prep),
            "ARRIVE" => Some(Phase::Arrive),
            "BUILD" => Some(Phase::Build),
            "THRIVE" => Some(Phase::Thrive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Prep => "PREP",
            Phase::Arrive => "ARRIVE",
            Phase::Build => "BUILD",
            Phase::Thrive => "THRIVE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scope dimensions used for claim gating
///
/// Seven dimensions must match exactly when a constraint names them;
/// `provider` is a user choice and never gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeType {
    State,
    Nationality,
    VisaType,
    Age,
    CreditScore,
    AssetBand,
    PreviousResidence,
    Provider,
}

impl ScopeType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "state" => Some(ScopeType::State),
            "nationality" => Some(ScopeType::Nationality),
            "visa_type" => Some(ScopeType::VisaType),
            "age" => Some(ScopeType::Age),
            "credit_score" => Some(ScopeType::CreditScore),
            "asset_band" => Some(ScopeType::AssetBand),
            "previous_residence" => Some(ScopeType::PreviousResidence),
            "provider" => Some(ScopeType::Provider),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::State => "state",
            ScopeType::Nationality => "nationality",
            ScopeType::VisaType => "visa_type",
            ScopeType::Age => "age",
            ScopeType::CreditScore => "credit_score",
            ScopeType::AssetBand => "asset_band",
            ScopeType::PreviousResidence => "previous_residence",
            ScopeType::Provider => "provider",
        }
    }

    /// Required dimensions must match exactly; provider is optional
    pub fn is_required(&self) -> bool {
        !matches!(self, ScopeType::Provider)
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of condition a requirement describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    Document,
    Action,
    Eligibility,
    Time,
}

/// A lifecycle goal users work toward (e.g. "Build credit history")
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub phase: Phase,
    #[serde(default)]
    pub description: String,
}

/// A concrete pathway that fulfills one or more goals
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub id: SolutionId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An assessed assertion that a solution is reachable under conditions
///
/// Carries its own provenance so downstream consumers can audit where the
/// assessment came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub date: String,
}

/// Boolean eligibility expression recommended by a claim
///
/// `logic_tree` is a serialized JSON expression whose leaves reference
/// requirement identities via a `has` operator; internal nodes carry
/// `AND`/`OR`/`NOT`/`K_OF_N` with a `children` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: String,
    #[serde(default)]
    pub logic_tree: String,
}

/// An atomic capability/document/eligibility/time condition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: RequirementId,
    pub name: String,
    #[serde(rename = "type")]
    pub requirement_type: RequirementType,
    #[serde(default)]
    pub description: String,
}

/// A (scope_type, value) constraint a claim is scoped to
///
/// `scope_type` stays a raw string so malformed catalog entries survive
/// deserialization; classification goes through [`ScopeType::from_str`] and
/// unknown dimensions are skipped during validation, never failed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScopeConstraint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub scope_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// Auxiliary annotation on a claim; informational only, never a gate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qualifier {
    #[serde(default)]
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub confidence: String,
}

fn default_confidence() -> String {
    "medium".to_string()
}

/// Per-goal ranking policy over candidate solutions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default)]
    pub ranking_rules: Vec<SolutionId>,
    #[serde(default)]
    pub user_rationale: String,
    #[serde(default)]
    pub internal_rationale: String,
    #[serde(default = "default_confidence")]
    pub confidence: String,
}

/// The assembled bundle of a claim plus every entity it depends on
///
/// A read-time query projection: regenerated on every evaluation, never
/// persisted, since the underlying catalog may change between requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graphlet {
    pub claim: Claim,
    pub clauses: Vec<Clause>,
    pub scopes: Vec<ScopeConstraint>,
    pub qualifiers: Vec<Qualifier>,
    pub requirements: Vec<Requirement>,
}
