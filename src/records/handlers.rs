use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Extension, Json, Router,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    records::{
        dto::{
            CreateRecordsRequest, DeleteManyRequest, EditManyRequest, EditRecordRequest,
            RecordItem,
        },
        repo::RecordStore,
        services,
    },
    state::AppState,
};

pub fn routes(store: RecordStore) -> Router<AppState> {
    Router::new()
        .route("/", post(create_many))
        .route("/edit-many", put(edit_many))
        .route("/delete", post(delete_many))
        .route(
            "/:id",
            axum::routing::get(list_by_user).put(edit_one).delete(delete_one),
        )
        .layer(Extension(store))
}

/// GET /:id lists by owner; the path id is the owning user's id.
#[instrument(skip(state))]
async fn list_by_user(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<RecordItem>>, ApiError> {
    let items = services::list_by_user(&state.db, store, user_id).await?;
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
async fn create_many(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateRecordsRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    services::create_many(&state.db, store, user_id, &payload.abouts).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": format!("{} created", store.label) })),
    ))
}

#[instrument(skip(state, payload))]
async fn edit_one(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<EditRecordRequest>,
) -> Result<StatusCode, ApiError> {
    services::edit_one(&state.db, store, id, &payload.about).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
async fn edit_many(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<EditManyRequest>,
) -> Result<StatusCode, ApiError> {
    services::edit_many(&state.db, store, &payload.items).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn delete_one(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete_one(&state.db, store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
async fn delete_many(
    State(state): State<AppState>,
    Extension(store): Extension<RecordStore>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<DeleteManyRequest>,
) -> Result<StatusCode, ApiError> {
    services::delete_many(&state.db, store, &payload.ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
