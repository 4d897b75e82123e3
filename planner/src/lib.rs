//! Roadmap planner library
//!
//! Filters and ranks a catalog of financial/legal solutions against a
//! user's profile, producing a prioritized roadmap of achievable goals.
//! The engine is a single-pass read-evaluate-filter over
//! (goal × solution × claim): each claim's dependency graphlet is
//! assembled from the catalog store and gated on exact-match scopes and
//! capability facts, surviving solutions are ranked per goal by strategy,
//! and goals with nothing viable are dropped. Errors follow a strict
//! no-fallbacks policy: integrity and store failures abort the request.

pub mod core;
pub mod error;
pub mod planner;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    GraphletAssembler, LogicTreeEvaluator, MissingRequirement, MissingScope, RequirementChecker,
    ScopeValidator, StrategyRanker,
};
pub use crate::error::{PlannerError, PlannerResult};
pub use crate::planner::Planner;
pub use crate::services::{MemoryCatalog, MemoryProfiles};
pub use crate::traits::{CatalogStore, ProfileStore};
