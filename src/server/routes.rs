//! Axum route handlers for the TeamAI HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`          — Returns `{"status": "ok", "version": "1.0.0"}`
//! - `POST /api/chat`        — Compose character responses for a message
//! - `GET  /api/teams`       — List teams for a user (`?userId=`)
//! - `POST /api/teams`       — Create a team
//! - `GET  /api/characters`  — The static character catalog
//! - `GET  /api/plans`       — The subscription plan catalog

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::characters::{self, Character};
use crate::chat::{CharacterResponse, ResponseComposer};
use crate::constants::DEFAULT_USER_ID;
use crate::plans::{self, SubscriptionPlan};
use crate::teams::{NewTeam, Team, TeamRegistry};
use crate::types::api::{ApiResponse, ChatRequest, TeamListQuery};
use crate::utilities::errors::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory team store shared across requests.
    pub teams: Arc<RwLock<TeamRegistry>>,
    /// The response composer. Stateless apart from the responder cap.
    pub composer: Arc<ResponseComposer>,
}

impl AppState {
    /// State with the demo-seeded team registry.
    pub fn new() -> Self {
        Self::with_registry(TeamRegistry::with_demo_teams())
    }

    /// State wrapping a specific registry. Tests use this for isolation.
    pub fn with_registry(registry: TeamRegistry) -> Self {
        Self {
            teams: Arc::new(RwLock::new(registry)),
            composer: Arc::new(ResponseComposer::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/teams", get(list_teams_handler).post(create_team_handler))
        .route("/api/characters", get(list_characters_handler))
        .route("/api/plans", get(list_plans_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain error to its HTTP status and response body.
///
/// Client errors surface their message; everything else collapses to the
/// generic internal-error body so no internal detail leaks.
fn error_reply(error: ApiError) -> ErrorReply {
    if error.is_client_error() {
        (StatusCode::BAD_REQUEST, Json(ApiResponse::err(error.to_string())))
    } else {
        tracing::error!("unexpected failure: {}", error);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::err("Internal server error")),
        )
    }
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "teamai",
    }))
}

/// POST /api/chat — compose canned character responses for a message.
///
/// `teamId` must be present for wire compatibility but is not consulted
/// by the composer.
async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ApiResponse<Vec<CharacterResponse>>>, ErrorReply> {
    if request.message.trim().is_empty()
        || request.team_id.trim().is_empty()
        || request.character_ids.is_empty()
    {
        return Err(error_reply(ApiError::invalid_request(
            "Message, team ID, and character IDs are required",
        )));
    }

    let responses = state
        .composer
        .compose(&request.message, &request.character_ids)
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::ok(
        responses,
        "Chat responses generated successfully",
    )))
}

/// GET /api/teams — list teams for a user, defaulting to `user-1`.
async fn list_teams_handler(
    State(state): State<AppState>,
    Query(query): Query<TeamListQuery>,
) -> Result<Json<ApiResponse<Vec<Team>>>, ErrorReply> {
    let owner = query.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);
    let registry = state
        .teams
        .read()
        .map_err(|_| error_reply(ApiError::internal("Team registry lock poisoned")))?;

    Ok(Json(ApiResponse::ok(
        registry.list_by_owner(owner),
        "Teams retrieved successfully",
    )))
}

/// POST /api/teams — create a team. 201 on success.
async fn create_team_handler(
    State(state): State<AppState>,
    Json(request): Json<NewTeam>,
) -> Result<(StatusCode, Json<ApiResponse<Team>>), ErrorReply> {
    let mut registry = state
        .teams
        .write()
        .map_err(|_| error_reply(ApiError::internal("Team registry lock poisoned")))?;

    let team = registry.create(request).map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(team, "Team created successfully")),
    ))
}

/// GET /api/characters — the static catalog.
async fn list_characters_handler() -> Json<ApiResponse<Vec<Character>>> {
    Json(ApiResponse::ok(
        characters::all().to_vec(),
        "Characters retrieved successfully",
    ))
}

/// GET /api/plans — the subscription plan catalog.
async fn list_plans_handler() -> Json<ApiResponse<Vec<SubscriptionPlan>>> {
    Json(ApiResponse::ok(
        plans::all().to_vec(),
        "Plans retrieved successfully",
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_uri(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn empty_app() -> Router {
        app_router(AppState::with_registry(TeamRegistry::new()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, json) = send(empty_app(), get_uri("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "teamai");
    }

    #[tokio::test]
    async fn test_chat_generates_capped_responses() {
        let body = serde_json::json!({
            "message": "we need a react frontend",
            "teamId": "team-1",
            "characterIds": [
                "dev-alex", "designer-sophia", "pm-marcus",
                "qa-elena", "analyst-david", "devops-sara",
            ],
        });
        let (status, json) = send(empty_app(), post_json("/api/chat", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Chat responses generated successfully");

        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["characterId"], "dev-alex");
        assert!(data[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("From a frontend perspective"));
        assert_eq!(data[0]["tokensCost"], 30);
        assert_eq!(data[0]["suggestions"][0], "Ask Alex for more details");
    }

    #[tokio::test]
    async fn test_chat_rejects_missing_fields() {
        let body = serde_json::json!({
            "message": "",
            "teamId": "team-1",
            "characterIds": ["dev-alex"],
        });
        let (status, json) = send(empty_app(), post_json("/api/chat", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Message, team ID, and character IDs are required");

        let body = serde_json::json!({"message": "hi", "characterIds": ["dev-alex"]});
        let (status, _) = send(empty_app(), post_json("/api/chat", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_rejects_unresolvable_characters() {
        let body = serde_json::json!({
            "message": "hello",
            "teamId": "team-1",
            "characterIds": ["ghost"],
        });
        let (status, json) = send(empty_app(), post_json("/api/chat", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "No valid characters found for this team");
    }

    #[tokio::test]
    async fn test_list_teams_defaults_to_demo_owner() {
        let app = app_router(AppState::new());
        let (status, json) = send(app, get_uri("/api/teams")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Teams retrieved successfully");

        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Web Development Team");
        assert_eq!(data[1]["name"], "Mobile App Team");
    }

    #[tokio::test]
    async fn test_list_teams_for_unknown_owner_is_empty() {
        let app = app_router(AppState::new());
        let (status, json) = send(app, get_uri("/api/teams?userId=nobody")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_team_and_round_trip() {
        let state = AppState::with_registry(TeamRegistry::new());
        let app = app_router(state.clone());

        let body = serde_json::json!({
            "name": "  Launch Team  ",
            "description": "Ships things",
            "characterIds": ["dev-alex", "qa-elena"],
            "userId": "u1",
        });
        let (status, json) = send(app.clone(), post_json("/api/teams", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Team created successfully");
        assert_eq!(json["data"]["name"], "Launch Team");
        assert_eq!(json["data"]["userId"], "u1");
        assert_eq!(json["data"]["characters"].as_array().unwrap().len(), 2);

        let (_, listed) = send(app, get_uri("/api/teams?userId=u1")).await;
        let data = listed["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["id"], json["data"]["id"]);
    }

    #[tokio::test]
    async fn test_create_team_rejects_too_many_members() {
        let state = AppState::with_registry(TeamRegistry::new());
        let app = app_router(state.clone());

        let body = serde_json::json!({
            "name": "Big Team",
            "characterIds": [
                "dev-alex", "designer-sophia", "pm-marcus",
                "qa-elena", "analyst-david", "devops-sara",
            ],
        });
        let (status, json) = send(app, post_json("/api/teams", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Maximum 5 characters allowed per team");

        // Failed create must not touch the store.
        assert!(state.teams.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_team_rejects_invalid_ids() {
        let body = serde_json::json!({
            "name": "Team",
            "characterIds": ["dev-alex", "ghost"],
        });
        let (status, json) = send(empty_app(), post_json("/api/teams", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid character IDs provided");
    }

    #[tokio::test]
    async fn test_list_characters() {
        let (status, json) = send(empty_app(), get_uri("/api/characters")).await;
        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 6);
        assert_eq!(data[0]["id"], "dev-alex");
        assert_eq!(data[0]["tokenCostMultiplier"], 1.2);
    }

    #[tokio::test]
    async fn test_list_plans() {
        let (status, json) = send(empty_app(), get_uri("/api/plans")).await;
        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[1]["id"], "pro");
        assert_eq!(data[1]["isPopular"], true);
    }
}
