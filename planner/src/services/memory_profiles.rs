//! In-memory profile store
//!
//! Keyed CRUD over user state documents, optionally seeded from a JSON
//! file at startup. Updates against unknown users are store failures, not
//! silent creates, matching the behavior of the document store this
//! stands in for.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

use crate::traits::ProfileStore;
use shared::{
    FactStatus, ProgressEntry, RequirementId, StoreError, StoreResult, UserId, UserState,
};

/// In-memory user state repository
pub struct MemoryProfiles {
    users: RwLock<HashMap<UserId, UserState>>,
}

impl MemoryProfiles {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Load user state documents from a JSON array file
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                context: format!("reading user states {}", path.display()),
                source,
            })?;
        let states: Vec<UserState> =
            serde_json::from_str(&raw).map_err(|source| StoreError::MalformedDocument {
                context: format!("parsing user states {}", path.display()),
                source,
            })?;

        let users = states
            .into_iter()
            .map(|state| (state.user_id.clone(), state))
            .collect();
        Ok(Self {
            users: RwLock::new(users),
        })
    }

    async fn with_user<F>(&self, user_id: &UserId, context: &str, apply: F) -> StoreResult<()>
    where
        F: FnOnce(&mut UserState),
    {
        let mut users = self.users.write().await;
        match users.get_mut(user_id) {
            Some(state) => {
                apply(state);
                Ok(())
            }
            None => Err(StoreError::query(
                context,
                format!("user {user_id} does not exist"),
            )),
        }
    }
}

impl Default for MemoryProfiles {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfiles {
    async fn get_user_state(&self, user_id: &UserId) -> StoreResult<Option<UserState>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn create_user_state(&self, state: UserState) -> StoreResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&state.user_id) {
            return Err(StoreError::query(
                "create_user_state",
                format!("user {} already exists", state.user_id),
            ));
        }
        users.insert(state.user_id.clone(), state);
        Ok(())
    }

    async fn update_scopes(
        &self,
        user_id: &UserId,
        scopes: HashMap<String, String>,
    ) -> StoreResult<()> {
        self.with_user(user_id, "update_scopes", |state| state.scopes = scopes)
            .await
    }

    async fn update_facts(
        &self,
        user_id: &UserId,
        facts: HashMap<RequirementId, FactStatus>,
    ) -> StoreResult<()> {
        self.with_user(user_id, "update_facts", |state| state.facts = facts)
            .await
    }

    async fn update_progress(
        &self,
        user_id: &UserId,
        progress: Vec<ProgressEntry>,
    ) -> StoreResult<()> {
        self.with_user(user_id, "update_progress", |state| state.progress = progress)
            .await
    }

    async fn delete_user_state(&self, user_id: &UserId) -> StoreResult<()> {
        let mut users = self.users.write().await;
        match users.remove(user_id) {
            Some(_) => Ok(()),
            None => Err(StoreError::query(
                "delete_user_state",
                format!("user {user_id} does not exist"),
            )),
        }
    }
}
