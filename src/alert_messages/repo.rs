use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::alert_messages::dto::AlertMessageItem;

#[derive(Debug, Clone, FromRow)]
pub struct AlertMessageRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub is_favorited: bool,
    pub created_at: OffsetDateTime,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<AlertMessageItem>> {
    let items = sqlx::query_as::<_, AlertMessageItem>(
        r#"
        SELECT id, content, is_favorited
        FROM alert_messages
        WHERE user_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(items)
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<AlertMessageRow>> {
    let row = sqlx::query_as::<_, AlertMessageRow>(
        r#"
        SELECT id, user_id, content, is_favorited, created_at
        FROM alert_messages
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn insert(db: &PgPool, user_id: Uuid, content: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO alert_messages (user_id, content) VALUES ($1, $2)")
        .bind(user_id)
        .bind(content)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn update_content(db: &PgPool, id: Uuid, content: &str) -> anyhow::Result<()> {
    sqlx::query("UPDATE alert_messages SET content = $2 WHERE id = $1")
        .bind(id)
        .bind(content)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn set_favorited(db: &PgPool, id: Uuid, favorited: bool) -> anyhow::Result<()> {
    sqlx::query("UPDATE alert_messages SET is_favorited = $2 WHERE id = $1")
        .bind(id)
        .bind(favorited)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM alert_messages WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
