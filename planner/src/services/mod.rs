//! Store implementations
//!
//! Reference implementations of the store traits backed by in-memory
//! snapshots. Production deployments swap in clients for the real graph
//! and document stores behind the same traits.

pub mod memory_catalog;
pub mod memory_profiles;

#[cfg(test)]
mod tests;

pub use memory_catalog::{CatalogDocument, MemoryCatalog};
pub use memory_profiles::MemoryProfiles;
