use futures::future::join_all;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::error::ApiError;
use crate::records::dto::{EditManyItem, RecordItem};
use crate::records::repo::{self, RecordStore};

pub async fn list_by_user(
    db: &PgPool,
    store: RecordStore,
    user_id: Uuid,
) -> Result<Vec<RecordItem>, ApiError> {
    let items = repo::list_by_user(db, store, user_id).await?;

    // A user with zero rows is reported as not found, not as an empty list.
    if items.is_empty() {
        return Err(ApiError::not_found(format!(
            "No {}s found for the user with id={user_id}",
            store.label.to_lowercase()
        )));
    }

    Ok(items)
}

pub async fn create_many(
    db: &PgPool,
    store: RecordStore,
    user_id: Uuid,
    abouts: &[String],
) -> Result<(), ApiError> {
    if abouts.is_empty() {
        return Err(ApiError::bad_request(format!(
            "At least one {} is required",
            store.label.to_lowercase()
        )));
    }

    if abouts.iter().any(|about| about.trim().is_empty()) {
        return Err(ApiError::bad_request(format!(
            "{} about must not be empty",
            store.label
        )));
    }

    repo::insert_many(db, store, user_id, abouts).await?;
    Ok(())
}

pub async fn edit_one(
    db: &PgPool,
    store: RecordStore,
    id: Uuid,
    about: &str,
) -> Result<(), ApiError> {
    if about.trim().is_empty() {
        return Err(ApiError::bad_request(format!(
            "{} about must not be empty",
            store.label
        )));
    }

    ensure_exists(db, store, id).await?;
    repo::update_about(db, store, id, about).await?;
    Ok(())
}

/// Applies every item edit concurrently. An item that fails is logged and
/// skipped; the remaining edits still apply.
pub async fn edit_many(
    db: &PgPool,
    store: RecordStore,
    items: &[EditManyItem],
) -> Result<(), ApiError> {
    let results = join_all(
        items
            .iter()
            .map(|item| edit_one(db, store, item.id, &item.about)),
    )
    .await;

    for (item, result) in items.iter().zip(results) {
        if let Err(err) = result {
            warn!(id = %item.id, error = %err, "bulk edit item failed");
        }
    }

    Ok(())
}

pub async fn delete_one(db: &PgPool, store: RecordStore, id: Uuid) -> Result<(), ApiError> {
    ensure_exists(db, store, id).await?;
    repo::delete_by_id(db, store, id).await?;
    Ok(())
}

/// All-or-nothing: every id is checked first and nothing is deleted when
/// any of them is unknown.
pub async fn delete_many(db: &PgPool, store: RecordStore, ids: &[Uuid]) -> Result<(), ApiError> {
    if ids.is_empty() {
        return Err(ApiError::bad_request("At least one id is required"));
    }

    let existing = repo::existing_ids(db, store, ids).await?;
    let missing = missing_ids(ids, &existing);
    if !missing.is_empty() {
        let listed = missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ApiError::not_found(format!(
            "{}s with ids=[{listed}] don't exist",
            store.label
        )));
    }

    repo::delete_many(db, store, ids).await?;
    Ok(())
}

/// Ids that were requested but are not present, in request order.
fn missing_ids(requested: &[Uuid], existing: &[Uuid]) -> Vec<Uuid> {
    requested
        .iter()
        .copied()
        .filter(|id| !existing.contains(id))
        .collect()
}

async fn ensure_exists(db: &PgPool, store: RecordStore, id: Uuid) -> Result<(), ApiError> {
    repo::find_by_id(db, store, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            ApiError::not_found(format!("{} with id={id} doesn't exist", store.label))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::repo::{DANGERS, HELPS};
    use crate::state::AppState;

    #[tokio::test]
    async fn create_rejects_an_empty_array() {
        let state = AppState::fake();
        let err = create_many(&state.db, HELPS, Uuid::new_v4(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_rejects_whitespace_about() {
        let state = AppState::fake();
        let abouts = vec!["loud noises".to_string(), "   ".to_string()];
        let err = create_many(&state.db, DANGERS, Uuid::new_v4(), &abouts)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn edit_rejects_empty_about() {
        let state = AppState::fake();
        let err = edit_one(&state.db, HELPS, Uuid::new_v4(), "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn bulk_delete_rejects_an_empty_id_set() {
        let state = AppState::fake();
        let err = delete_many(&state.db, DANGERS, &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn missing_ids_keeps_request_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let existing = vec![b];
        assert_eq!(missing_ids(&[a, b, c], &existing), vec![a, c]);
    }

    #[test]
    fn missing_ids_is_empty_when_all_exist() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(missing_ids(&[a, b], &[b, a]).is_empty());
    }
}
