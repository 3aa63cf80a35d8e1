use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::records::{dto::RecordItem, repo as records_repo};
use crate::users::dto::RegisterRequest;
use crate::users::repo::{self, User};

/// A user row together with the helps and dangers it owns.
pub struct UserWithRecords {
    pub user: User,
    pub helps: Vec<RecordItem>,
    pub dangers: Vec<RecordItem>,
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<UserWithRecords, ApiError> {
    let user = repo::find_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User with id={id} doesn't exist")))?;

    let helps = records_repo::list_by_user(db, records_repo::HELPS, id).await?;
    let dangers = records_repo::list_by_user(db, records_repo::DANGERS, id).await?;

    Ok(UserWithRecords {
        user,
        helps,
        dangers,
    })
}

pub async fn register(db: &PgPool, req: RegisterRequest) -> Result<(), ApiError> {
    if repo::find_by_email(db, &req.email).await?.is_some() {
        return Err(ApiError::bad_request("User with that email already exists"));
    }

    let hashed = hash_password(&req.password)?;
    let user_id = repo::insert(
        db,
        &req.name,
        &req.email,
        &hashed,
        req.about.as_deref(),
        req.neurodivergence.as_deref(),
    )
    .await?;

    // Seed rows follow the user insert sequentially; a failure here leaves
    // the user row in place.
    if let Some(helps) = &req.helps {
        records_repo::insert_many(db, records_repo::HELPS, user_id, helps).await?;
    }
    if let Some(dangers) = &req.dangers {
        records_repo::insert_many(db, records_repo::DANGERS, user_id, dangers).await?;
    }

    Ok(())
}

pub async fn login(
    db: &PgPool,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let user = repo::find_by_email(db, email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User with email={email} doesn't exist")))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::unauthorized(format!(
            "Incorrect password for the user with email={email}"
        )));
    }

    Ok(keys.sign(user.id, &user.email)?)
}

pub async fn update_user(
    db: &PgPool,
    id: Uuid,
    name: &str,
    email: &str,
    about: &str,
    password: &str,
    neurodivergence: &str,
) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;

    // The email is written as-is; a duplicate surfaces as a constraint
    // violation rather than a domain error.
    let hashed = hash_password(password)?;
    repo::update_profile(db, id, name, email, &hashed, about, neurodivergence).await?;
    Ok(())
}

pub async fn update_about(db: &PgPool, id: Uuid, about: &str) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::update_about(db, id, about).await?;
    Ok(())
}

pub async fn update_neurodivergence(
    db: &PgPool,
    id: Uuid,
    neurodivergence: &str,
) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::update_neurodivergence(db, id, neurodivergence).await?;
    Ok(())
}

pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::delete_by_id(db, id).await?;
    Ok(())
}

async fn ensure_exists(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    repo::find_by_id(db, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found(format!("User with id={id} doesn't exist")))
}
