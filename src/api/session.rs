//! Session endpoints (role login/logout)

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{CatalogView, Role, SessionInfo},
    AppState,
};

use super::ApiJson;

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Role to act as (admin or user)
    pub role: Role,
}

/// Get the current session
#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    responses(
        (status = 200, description = "Current session", body = SessionInfo)
    )
)]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionInfo> {
    Json(state.services.catalog.session().await)
}

/// Log in with a role
#[utoipa::path(
    post,
    path = "/session/login",
    tag = "session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, catalog for the role", body = CatalogView),
        (status = 400, description = "Unknown role", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<CatalogView>> {
    Ok(Json(state.services.catalog.login(request.role).await))
}

/// Log out and discard the catalog
#[utoipa::path(
    post,
    path = "/session/logout",
    tag = "session",
    responses(
        (status = 200, description = "Logged out", body = CatalogView)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Json<CatalogView> {
    Json(state.services.catalog.logout().await)
}
