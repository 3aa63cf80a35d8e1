use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::nonverbal_messages::dto::{NonverbalMessageItem, NonverbalMessageType};
use crate::nonverbal_messages::repo;

pub async fn get_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<NonverbalMessageItem>, ApiError> {
    let own = repo::list_by_user(db, user_id).await?;
    let defaults = repo::list_defaults_for_user(db, user_id).await?;
    Ok(merge(own, defaults))
}

pub async fn get_favorited_by_user(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Vec<NonverbalMessageItem>, ApiError> {
    let own = repo::list_favorited_by_user(db, user_id).await?;
    let defaults = repo::list_favorited_defaults_for_user(db, user_id).await?;
    Ok(merge(own, defaults))
}

/// Own messages first, catalog defaults after.
fn merge(
    own: Vec<NonverbalMessageItem>,
    defaults: Vec<NonverbalMessageItem>,
) -> Vec<NonverbalMessageItem> {
    let mut merged = own;
    merged.extend(defaults);
    merged
}

pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    content: &str,
    emoji_icon: &str,
    kind: NonverbalMessageType,
) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Nonverbal message content must not be empty",
        ));
    }
    repo::insert(db, user_id, content, emoji_icon, kind).await?;
    Ok(())
}

pub async fn edit(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    content: &str,
    emoji_icon: &str,
    kind: NonverbalMessageType,
    is_favorited: bool,
) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Nonverbal message content must not be empty",
        ));
    }
    ensure_exists(db, id).await?;
    repo::update(db, id, user_id, content, emoji_icon, kind, is_favorited).await?;
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

/// Soft delete of a catalog default for one user: the join row is upserted
/// with `user_has = false`; other users keep seeing the entry.
pub async fn delete_default(db: &PgPool, user_id: Uuid, default_id: Uuid) -> Result<(), ApiError> {
    repo::find_default_by_id(db, default_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Default nonverbal message with id={default_id} doesn't exist"
            ))
        })?;

    repo::opt_out_default(db, user_id, default_id).await?;
    Ok(())
}

async fn ensure_exists(db: &PgPool, id: Uuid) -> Result<(), ApiError> {
    repo::find_by_id(db, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            ApiError::not_found(format!("Nonverbal message with id={id} doesn't exist"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn item(content: &str, kind: NonverbalMessageType, favorited: bool) -> NonverbalMessageItem {
        NonverbalMessageItem {
            id: Uuid::new_v4(),
            content: content.into(),
            emoji_icon: "🙂".into(),
            kind,
            is_favorited: favorited,
        }
    }

    #[test]
    fn merge_puts_own_messages_before_defaults() {
        let own = vec![item("mine", NonverbalMessageType::Feelings, false)];
        let defaults = vec![
            item("default one", NonverbalMessageType::Problems, false),
            item("default two", NonverbalMessageType::Feelings, true),
        ];
        let merged = merge(own, defaults);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].content, "mine");
        assert_eq!(merged[1].content, "default one");
        assert_eq!(merged[2].content, "default two");
    }

    #[test]
    fn merge_of_two_empty_lists_is_empty() {
        assert!(merge(vec![], vec![]).is_empty());
    }

    #[tokio::test]
    async fn create_rejects_empty_content() {
        let state = AppState::fake();
        let err = create(
            &state.db,
            Uuid::new_v4(),
            " ",
            "🙂",
            NonverbalMessageType::Feelings,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn edit_rejects_empty_content() {
        let state = AppState::fake();
        let err = edit(
            &state.db,
            Uuid::new_v4(),
            Uuid::new_v4(),
            "",
            "🙂",
            NonverbalMessageType::Problems,
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
