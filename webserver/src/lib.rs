//! HTTP surface over the planner library
//!
//! Thin axum routing: every endpoint delegates to the planner or its
//! profile store, and the error module maps the planner's error taxonomy
//! onto status codes.

pub mod api;
pub mod error;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use planner::{CatalogStore, Planner, ProfileStore};
use std::sync::Arc;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Build the full application router over injected stores
pub fn router<C, P>(planner: Arc<Planner<C, P>>) -> Router
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let app_state = AppState::new(planner);

    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/api/v1/roadmap/:user_id", get(api::get_roadmap::<C, P>))
        .route("/api/v1/users", post(api::create_user::<C, P>))
        .route("/api/v1/users/:user_id", get(api::get_user::<C, P>))
        .route("/api/v1/users/:user_id", delete(api::delete_user::<C, P>))
        .route(
            "/api/v1/users/:user_id/scopes",
            put(api::put_scopes::<C, P>),
        )
        .route("/api/v1/users/:user_id/facts", put(api::put_facts::<C, P>))
        .route(
            "/api/v1/users/:user_id/progress",
            put(api::put_progress::<C, P>),
        )
        // Permissive CORS for local dashboard development
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
