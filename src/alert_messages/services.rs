use sqlx::PgPool;
use uuid::Uuid;

use crate::alert_messages::dto::AlertMessageItem;
use crate::alert_messages::repo;
use crate::error::ApiError;

pub async fn get_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<AlertMessageItem>, ApiError> {
    Ok(repo::list_by_user(db, user_id).await?)
}

pub async fn create(db: &PgPool, user_id: Uuid, content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Alert message content must not be empty",
        ));
    }
    repo::insert(db, user_id, content).await?;
    Ok(())
}

pub async fn edit_content(db: &PgPool, id: Uuid, content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Alert message content must not be empty",
        ));
    }
    ensure_exists(db, id).await?;
    repo::update_content(db, id, content).await?;
    Ok(())
}

pub async fn favorite(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::set_favorited(db, id, true).await?;
    Ok(())
}

pub async fn unfavorite(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::set_favorited(db, id, false).await?;
    Ok(())
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    ensure_exists(db, id).await?;
    repo::delete_by_id(db, id).await?;
    Ok(())
}

async fn ensure_exists(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    repo::find_by_id(db, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found(format!("Alert message with id={id} doesn't exist")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let state = AppState::fake();
        let err = create(&state.db, Uuid::new_v4(), "   ").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn edit_rejects_empty_content() {
        let state = AppState::fake();
        let err = edit_content(&state.db, Uuid::new_v4(), "").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
