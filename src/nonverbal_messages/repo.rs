use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nonverbal_messages::dto::{NonverbalMessageItem, NonverbalMessageType};

#[derive(Debug, Clone, FromRow)]
pub struct NonverbalMessageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub emoji_icon: String,
    #[sqlx(rename = "type")]
    pub kind: NonverbalMessageType,
    pub is_favorited: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct DefaultMessageRow {
    pub id: Uuid,
    pub content: String,
    pub emoji_icon: String,
    #[sqlx(rename = "type")]
    pub kind: NonverbalMessageType,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<NonverbalMessageItem>> {
    let items = sqlx::query_as::<_, NonverbalMessageItem>(
        r#"
        SELECT id, content, emoji_icon, type, is_favorited
        FROM nonverbal_messages
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(items)
}

pub async fn list_favorited_by_user(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Vec<NonverbalMessageItem>> {
    let items = sqlx::query_as::<_, NonverbalMessageItem>(
        r#"
        SELECT id, content, emoji_icon, type, is_favorited
        FROM nonverbal_messages
        WHERE user_id = $1 AND is_favorited
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(items)
}

/// Catalog defaults still visible to the user. A missing join row counts as
/// visible and unfavorited.
pub async fn list_defaults_for_user(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Vec<NonverbalMessageItem>> {
    let items = sqlx::query_as::<_, NonverbalMessageItem>(
        r#"
        SELECT d.id, d.content, d.emoji_icon, d.type,
               COALESCE(j.is_favorited, FALSE) AS is_favorited
        FROM default_nonverbal_messages d
        LEFT JOIN user_default_nonverbal_messages j
            ON j.default_message_id = d.id AND j.user_id = $1
        WHERE COALESCE(j.user_has, TRUE)
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(items)
}

pub async fn list_favorited_defaults_for_user(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Vec<NonverbalMessageItem>> {
    let items = sqlx::query_as::<_, NonverbalMessageItem>(
        r#"
        SELECT d.id, d.content, d.emoji_icon, d.type,
               COALESCE(j.is_favorited, FALSE) AS is_favorited
        FROM default_nonverbal_messages d
        LEFT JOIN user_default_nonverbal_messages j
            ON j.default_message_id = d.id AND j.user_id = $1
        WHERE COALESCE(j.user_has, TRUE) AND COALESCE(j.is_favorited, FALSE)
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(items)
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<NonverbalMessageRow>> {
    let row = sqlx::query_as::<_, NonverbalMessageRow>(
        r#"
        SELECT id, user_id, content, emoji_icon, type, is_favorited, created_at
        FROM nonverbal_messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    content: &str,
    emoji_icon: &str,
    kind: NonverbalMessageType,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO nonverbal_messages (user_id, content, emoji_icon, type)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(content)
    .bind(emoji_icon)
    .bind(kind)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    content: &str,
    emoji_icon: &str,
    kind: NonverbalMessageType,
    is_favorited: bool,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE nonverbal_messages
        SET user_id = $2, content = $3, emoji_icon = $4, type = $5, is_favorited = $6
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(content)
    .bind(emoji_icon)
    .bind(kind)
    .bind(is_favorited)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn set_favorited(db: &PgPool, id: Uuid, favorited: bool) -> anyhow::Result<()> {
    sqlx::query("UPDATE nonverbal_messages SET is_favorited = $2 WHERE id = $1")
        .bind(id)
        .bind(favorited)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM nonverbal_messages WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn find_default_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<DefaultMessageRow>> {
    let row = sqlx::query_as::<_, DefaultMessageRow>(
        r#"
        SELECT id, content, emoji_icon, type
        FROM default_nonverbal_messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Hides a catalog default for one user. The catalog row itself is never
/// touched.
pub async fn opt_out_default(db: &PgPool, user_id: Uuid, default_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_default_nonverbal_messages (user_id, default_message_id, user_has)
        VALUES ($1, $2, FALSE)
        ON CONFLICT (user_id, default_message_id) DO UPDATE SET user_has = FALSE
        "#,
    )
    .bind(user_id)
    .bind(default_id)
    .execute(db)
    .await?;
    Ok(())
}
