//! REST API handlers
//!
//! HTTP endpoints over the planner library. Handlers are generic over the
//! injected stores so the same router serves production stores and test
//! doubles.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::info;

use planner::{CatalogStore, PlannerError, ProfileStore};
use shared::{FactStatus, Phase, ProgressEntry, RequirementId, UserId, UserState};

use crate::error::{bad_request, ApiError};
use crate::state::AppState;

/// Service identity - `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "planner-webserver",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness check - `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct RoadmapParams {
    pub phase: Option<String>,
}

/// Compute a roadmap - `GET /api/v1/roadmap/{user_id}?phase=`
pub async fn get_roadmap<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
    Query(params): Query<RoadmapParams>,
) -> Result<Response, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let phase = match params.phase.as_deref() {
        Some(raw) => match Phase::from_str(raw) {
            Some(phase) => Some(phase),
            None => {
                return Ok(bad_request(format!(
                    "Invalid phase '{}': expected PREP, ARRIVE, BUILD or THRIVE",
                    raw
                )))
            }
        },
        None => None,
    };

    let user_id = UserId::new(user_id);
    let roadmap = state.planner.roadmap_for_user(&user_id, phase).await?;
    Ok(Json(roadmap).into_response())
}

/// Fetch a user's state - `GET /api/v1/users/{user_id}`
pub async fn get_user<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserState>, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = UserId::new(user_id);
    let user_state = state
        .planner
        .profiles()
        .get_user_state(&user_id)
        .await?
        .ok_or_else(|| PlannerError::UserNotFound {
            user_id: user_id.to_string(),
        })?;
    Ok(Json(user_state))
}

/// Create a user state document - `POST /api/v1/users`
pub async fn create_user<C, P>(
    State(state): State<AppState<C, P>>,
    Json(user_state): Json<UserState>,
) -> Result<(StatusCode, Json<Value>), ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = user_state.user_id.clone();
    state.planner.profiles().create_user_state(user_state).await?;
    info!(user = %user_id, "User created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "user_id": user_id, "status": "created" })),
    ))
}

/// Delete a user state document - `DELETE /api/v1/users/{user_id}`
pub async fn delete_user<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = UserId::new(user_id);
    ensure_user_exists(&state, &user_id).await?;
    state.planner.profiles().delete_user_state(&user_id).await?;
    info!(user = %user_id, "User deleted");
    Ok(Json(json!({ "user_id": user_id, "status": "deleted" })))
}

/// Replace a user's scope map - `PUT /api/v1/users/{user_id}/scopes`
pub async fn put_scopes<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
    Json(scopes): Json<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = UserId::new(user_id);
    ensure_user_exists(&state, &user_id).await?;
    state
        .planner
        .profiles()
        .update_scopes(&user_id, scopes)
        .await?;
    Ok(Json(json!({ "user_id": user_id, "status": "updated" })))
}

/// Replace a user's fact map - `PUT /api/v1/users/{user_id}/facts`
pub async fn put_facts<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
    Json(facts): Json<HashMap<RequirementId, FactStatus>>,
) -> Result<Json<Value>, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = UserId::new(user_id);
    ensure_user_exists(&state, &user_id).await?;
    state
        .planner
        .profiles()
        .update_facts(&user_id, facts)
        .await?;
    Ok(Json(json!({ "user_id": user_id, "status": "updated" })))
}

/// Replace a user's progress log - `PUT /api/v1/users/{user_id}/progress`
pub async fn put_progress<C, P>(
    State(state): State<AppState<C, P>>,
    Path(user_id): Path<String>,
    Json(progress): Json<Vec<ProgressEntry>>,
) -> Result<Json<Value>, ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    let user_id = UserId::new(user_id);
    ensure_user_exists(&state, &user_id).await?;
    state
        .planner
        .profiles()
        .update_progress(&user_id, progress)
        .await?;
    Ok(Json(json!({ "user_id": user_id, "status": "updated" })))
}

/// 404 for updates against a user that was never created
async fn ensure_user_exists<C, P>(
    state: &AppState<C, P>,
    user_id: &UserId,
) -> Result<(), ApiError>
where
    C: CatalogStore + 'static,
    P: ProfileStore + 'static,
{
    match state.planner.profiles().get_user_state(user_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError(PlannerError::UserNotFound {
            user_id: user_id.to_string(),
        })),
    }
}
