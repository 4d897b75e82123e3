//! Shared application state

use planner::{CatalogStore, Planner, ProfileStore};
use std::sync::Arc;

/// State handed to every handler; cheap to clone
pub struct AppState<C, P>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    pub planner: Arc<Planner<C, P>>,
}

impl<C, P> Clone for AppState<C, P>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    fn clone(&self) -> Self {
        Self {
            planner: Arc::clone(&self.planner),
        }
    }
}

impl<C, P> AppState<C, P>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    pub fn new(planner: Arc<Planner<C, P>>) -> Self {
        Self { planner }
    }
}
