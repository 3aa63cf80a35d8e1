use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch},
    Json, Router,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    alert_messages::{
        dto::{AlertMessageItem, CreateAlertMessageRequest, EditContentRequest},
        services,
    },
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/edit/content/:id", patch(edit_content))
        .route("/favorite/:id", patch(favorite))
        .route("/unfavorite/:id", patch(unfavorite))
        .route("/:id", delete(delete_message))
}

#[instrument(skip(state))]
async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<AlertMessageItem>>, ApiError> {
    let items = services::get_by_user(&state.db, user_id).await?;
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateAlertMessageRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    services::create(&state.db, user_id, &payload.content).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Alert Message created" })),
    ))
}

#[instrument(skip(state, payload))]
async fn edit_content(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditContentRequest>,
) -> Result<StatusCode, ApiError> {
    services::edit_content(&state.db, id, &payload.content).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn favorite(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::favorite(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn unfavorite(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::unfavorite(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn delete_message(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
