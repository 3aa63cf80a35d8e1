use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{extractors::AuthUser, jwt::JwtKeys},
    error::ApiError,
    state::AppState,
    users::{
        dto::{
            EditAboutRequest, EditNeurodivergenceRequest, EditUserRequest, LoginRequest,
            RegisterRequest, SafeUserResponse, TokenResponse, UserResponse,
        },
        services,
    },
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/about", patch(edit_about))
        .route("/neurodivergence", patch(edit_neurodivergence))
        .route("/:id", get(get_by_id).put(edit_user).delete(delete_user))
        .route("/:id/safe", get(get_by_id_safe))
}

#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::bad_request("Invalid email"));
    }

    let email = payload.email.clone();
    services::register(&state.db, payload).await?;

    info!(email = %email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created" })),
    ))
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::bad_request("Invalid email"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = services::login(&state.db, &keys, &payload.email, &payload.password).await?;

    info!(email = %payload.email, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state))]
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let found = services::get_by_id(&state.db, id).await?;
    Ok(Json(UserResponse {
        id: found.user.id,
        name: found.user.name,
        email: found.user.email,
        password: found.user.password_hash,
        about: found.user.about,
        neurodivergence: found.user.neurodivergence,
        helps: found.helps,
        dangers: found.dangers,
    }))
}

#[instrument(skip(state))]
async fn get_by_id_safe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SafeUserResponse>, ApiError> {
    let found = services::get_by_id(&state.db, id).await?;
    Ok(Json(SafeUserResponse {
        name: found.user.name,
        about: found.user.about,
        neurodivergence: found.user.neurodivergence,
        helps: found.helps,
        dangers: found.dangers,
    }))
}

/// The edited user is the token holder; the path id is accepted for route
/// shape only.
#[instrument(skip(state, payload))]
async fn edit_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(_id): Path<Uuid>,
    Json(payload): Json<EditUserRequest>,
) -> Result<StatusCode, ApiError> {
    services::update_user(
        &state.db,
        user_id,
        &payload.name,
        &payload.email,
        &payload.about,
        &payload.password,
        &payload.neurodivergence,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
async fn edit_about(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<EditAboutRequest>,
) -> Result<StatusCode, ApiError> {
    services::update_about(&state.db, user_id, &payload.about).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
async fn edit_neurodivergence(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<EditNeurodivergenceRequest>,
) -> Result<StatusCode, ApiError> {
    services::update_neurodivergence(&state.db, user_id, &payload.neurodivergence).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    services::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_junk() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@no-local.com"));
    }
}
