//! Unit tests for the in-memory profile store

use crate::services::MemoryProfiles;
use crate::traits::ProfileStore;
use shared::{FactStatus, ProgressEntry, RequirementId, SolutionId, UserId, UserState};
use std::collections::HashMap;
use std::io::Write;

fn sample_user(id: &str) -> UserState {
    UserState {
        user_id: UserId::new(id),
        basic_info: serde_json::json!({"name": "John Doe"}),
        scopes: [("state", "CA"), ("visa_type", "H-1B")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        facts: [(RequirementId::new("req_ssn"), FactStatus::Have)]
            .into_iter()
            .collect(),
        progress: Vec::new(),
        timeline: HashMap::new(),
        preferences: Default::default(),
    }
}

#[tokio::test]
async fn test_create_get_delete_cycle() {
    let profiles = MemoryProfiles::new();
    let user_id = UserId::new("u_1");

    assert!(profiles.get_user_state(&user_id).await.unwrap().is_none());

    profiles.create_user_state(sample_user("u_1")).await.unwrap();
    let fetched = profiles.get_user_state(&user_id).await.unwrap().unwrap();
    assert_eq!(fetched.scopes["state"], "CA");

    profiles.delete_user_state(&user_id).await.unwrap();
    assert!(profiles.get_user_state(&user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_create_fails() {
    let profiles = MemoryProfiles::new();
    profiles.create_user_state(sample_user("u_1")).await.unwrap();
    let error = profiles
        .create_user_state(sample_user("u_1"))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_updates_replace_sections() {
    let profiles = MemoryProfiles::new();
    let user_id = UserId::new("u_1");
    profiles.create_user_state(sample_user("u_1")).await.unwrap();

    let mut scopes = HashMap::new();
    scopes.insert("state".to_string(), "NY".to_string());
    profiles.update_scopes(&user_id, scopes).await.unwrap();

    let mut facts = HashMap::new();
    facts.insert(RequirementId::new("req_itin"), FactStatus::Need);
    profiles.update_facts(&user_id, facts).await.unwrap();

    profiles
        .update_progress(
            &user_id,
            vec![ProgressEntry {
                solution_id: SolutionId::new("sol_ssn_application"),
                status: "done".to_string(),
                updated_at: "2025-09-02".to_string(),
                notes: String::new(),
            }],
        )
        .await
        .unwrap();

    let state = profiles.get_user_state(&user_id).await.unwrap().unwrap();
    assert_eq!(state.scopes.len(), 1);
    assert_eq!(state.scopes["state"], "NY");
    assert_eq!(state.facts[&RequirementId::new("req_itin")], FactStatus::Need);
    assert_eq!(state.progress.len(), 1);
}

#[tokio::test]
async fn test_updates_against_unknown_user_fail() {
    let profiles = MemoryProfiles::new();
    let user_id = UserId::new("u_ghost");

    let error = profiles
        .update_scopes(&user_id, HashMap::new())
        .await
        .unwrap_err();
    assert!(error.to_string().contains("does not exist"));

    let error = profiles.delete_user_state(&user_id).await.unwrap_err();
    assert!(error.to_string().contains("does not exist"));
}

#[tokio::test]
async fn test_load_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let seed = serde_json::to_string(&vec![sample_user("u_1"), sample_user("u_2")]).unwrap();
    file.write_all(seed.as_bytes()).unwrap();

    let profiles = MemoryProfiles::load(file.path()).await.unwrap();
    assert!(profiles
        .get_user_state(&UserId::new("u_2"))
        .await
        .unwrap()
        .is_some());
}
