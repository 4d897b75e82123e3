//! Shared types for the roadmap planner system
//!
//! Contains the catalog entity model, user state, the roadmap artifact,
//! store error types, and logging initialization. Component-internal types
//! (planner pipeline state, webserver request models) are kept in their
//! respective crates.

pub mod errors;
pub mod logging;
pub mod roadmap;
pub mod types;
pub mod user;

pub use errors::*;
pub use roadmap::*;
pub use types::*;
pub use user::*;
