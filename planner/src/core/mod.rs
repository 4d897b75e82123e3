//! Core viability and ranking components
//!
//! Each component is a small, separately testable unit; the planner wires
//! them together over the injected stores.

pub mod graphlet;
pub mod logic_tree;
pub mod ranking;
pub mod requirements;
pub mod scope;

pub use graphlet::GraphletAssembler;
pub use logic_tree::LogicTreeEvaluator;
pub use ranking::{StrategyRanker, DEFAULT_RANKING_RATIONALE};
pub use requirements::{MissingRequirement, RequirementChecker};
pub use scope::{MissingScope, ScopeValidator};
