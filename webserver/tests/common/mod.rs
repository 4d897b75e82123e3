//! Shared helpers for webserver integration tests

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use planner::{MemoryCatalog, MemoryProfiles, Planner, ProfileStore};
use shared::UserState;

pub const USER_ID: &str = "u_web_42";

/// One ARRIVE goal and one BUILD goal, both trivially viable
pub const TWO_PHASE_CATALOG: &str = r#"{
    "goals": [
        {"id": "goal_bank", "name": "Open a bank account", "phase": "ARRIVE"},
        {"id": "goal_credit", "name": "Build credit history", "phase": "BUILD"}
    ],
    "solutions": [
        {"id": "sol_checking", "name": "Basic checking account"},
        {"id": "sol_secured_card", "name": "Secured credit card"}
    ],
    "fulfills": [
        {"solution_id": "sol_checking", "goal_id": "goal_bank"},
        {"solution_id": "sol_secured_card", "goal_id": "goal_credit"}
    ],
    "claims": [
        {"solution_id": "sol_checking", "id": "ac_chk"},
        {"solution_id": "sol_secured_card", "id": "ac_card"}
    ],
    "strategies": [
        {"goal_id": "goal_bank", "ranking_rules": ["sol_checking"]},
        {"goal_id": "goal_credit", "ranking_rules": ["sol_secured_card"]}
    ]
}"#;

pub fn sample_user() -> UserState {
    serde_json::from_value(serde_json::json!({
        "user_id": USER_ID,
        "scopes": {"state": "CA", "visa_type": "H-1B"},
        "facts": {"req_ssn": "have"}
    }))
    .expect("sample user state should deserialize")
}

/// Build the full router over an in-memory catalog and one seeded user
pub async fn app_with_user(catalog_json: &str) -> Router {
    let catalog = MemoryCatalog::from_json(catalog_json).expect("fixture catalog should parse");
    let profiles = MemoryProfiles::new();
    profiles
        .create_user_state(sample_user())
        .await
        .expect("seed user should insert");
    let planner = Planner::new(Arc::new(catalog), Arc::new(profiles));
    webserver::router(Arc::new(planner))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router should respond");
    decode(response).await
}

pub async fn decode(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
