//! Unit tests for store implementations

mod memory_profiles;
