use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, put},
    Json, Router,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    nonverbal_messages::{
        dto::{CreateNonverbalMessageRequest, EditNonverbalMessageRequest, NonverbalMessageItem},
        services,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/favoriteds", get(list_favoriteds))
        .route("/edit/:id", put(edit))
        .route("/favorite/:id", patch(favorite))
        .route("/unfavorite/:id", patch(unfavorite))
        .route(
            "/delete/default-nonverbal-message/:id",
            patch(delete_default),
        )
        .route("/:id", delete(delete_message))
}

#[instrument(skip(state))]
async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<NonverbalMessageItem>>, ApiError> {
    let items = services::get_by_user(&state.db, user_id).await?;
    Ok(Json(items))
}

#[instrument(skip(state))]
async fn list_favoriteds(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<NonverbalMessageItem>>, ApiError> {
    let items = services::get_favorited_by_user(&state.db, user_id).await?;
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateNonverbalMessageRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    services::create(
        &state.db,
        user_id,
        &payload.content,
        &payload.emoji_icon,
        payload.kind,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Nonverbal Message created" })),
    ))
}

#[instrument(skip(state, payload))]
async fn edit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditNonverbalMessageRequest>,
) -> Result<StatusCode, ApiError> {
    services::edit(
        &state.db,
        id,
        user_id,
        &payload.content,
        &payload.emoji_icon,
        payload.kind,
        payload.is_favorited,
    )
    .await?;
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
async fn delete_default(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete_default(&state.db, user_id, id).await?;
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
