use crate::{
    api::models::{ApiError, ErrorResponse},
    auth::jwt::{Claims, JwtService},
    core::{
        errors::GroupeaseError,
        models::{Group, GroupPayload},
        services::GroupPolicy,
    },
    infrastructure::{
        directory::in_memory::InMemoryDirectory, logging::in_memory::InMemoryLogging,
        storage::in_memory::InMemoryGroupStore,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
};
use http::header;
use std::sync::Arc;

pub type AppPolicy = GroupPolicy<InMemoryDirectory, InMemoryGroupStore, InMemoryLogging>;

#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<AppPolicy>,
    pub jwt: Arc<JwtService>,
}

// Validates the bearer token and exposes its claims to the handlers
async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| GroupeaseError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| GroupeaseError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = state.jwt.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/channels/{channel_id}/groups", get(list_groups).post(create_group))
        .route(
            "/channels/{channel_id}/groups/{group_id}",
            get(get_group).put(update_group),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/groups",
    params(
        ("channel_id" = i64, Path, description = "ID of the channel")
    ),
    responses(
        (status = 200, description = "Groups in the channel", body = Vec<Group>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a channel member", body = ErrorResponse),
        (status = 404, description = "No profile for caller", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(channel_id): Path<i64>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = state.policy.list(channel_id, &claims.sub).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/api/channels/{channel_id}/groups/{group_id}",
    params(
        ("channel_id" = i64, Path, description = "ID of the channel"),
        ("group_id" = i64, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "The group", body = Group),
        (status = 403, description = "Caller is not a channel member", body = ErrorResponse),
        (status = 404, description = "Group not found in this channel", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_group(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((channel_id, group_id)): Path<(i64, i64)>,
) -> Result<Json<Group>, ApiError> {
    let group = state.policy.get_by_id(channel_id, group_id, &claims.sub).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/api/channels/{channel_id}/groups",
    params(
        ("channel_id" = i64, Path, description = "ID of the channel")
    ),
    request_body = GroupPayload,
    responses(
        (status = 200, description = "Group created", body = Group),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not a channel member", body = ErrorResponse),
        (status = 409, description = "Group name already used in channel", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_group(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(channel_id): Path<i64>,
    Json(payload): Json<GroupPayload>,
) -> Result<Json<Group>, ApiError> {
    let group = state.policy.create(channel_id, payload, &claims.sub).await?;
    Ok(Json(group))
}

#[utoipa::path(
    put,
    path = "/api/channels/{channel_id}/groups/{group_id}",
    params(
        ("channel_id" = i64, Path, description = "ID of the channel"),
        ("group_id" = i64, Path, description = "ID of the group")
    ),
    request_body = GroupPayload,
    responses(
        (status = 200, description = "Group updated", body = Group),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Caller is not a channel or group member", body = ErrorResponse),
        (status = 404, description = "Group not found in this channel", body = ErrorResponse),
        (status = 409, description = "Group name already used in channel", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_group(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((channel_id, group_id)): Path<(i64, i64)>,
    Json(payload): Json<GroupPayload>,
) -> Result<Json<Group>, ApiError> {
    let group = state.policy.update(channel_id, group_id, payload, &claims.sub).await?;
    Ok(Json(group))
}
