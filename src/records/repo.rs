use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::records::dto::RecordItem;

/// Helps and dangers are the same owned text record; a store names the
/// backing table and the label used in messages. Table names only ever come
/// from the two constants below.
#[derive(Debug, Clone, Copy)]
pub struct RecordStore {
    pub table: &'static str,
    pub label: &'static str,
}

pub const HELPS: RecordStore = RecordStore {
    table: "helps",
    label: "Help",
};

pub const DANGERS: RecordStore = RecordStore {
    table: "dangers",
    label: "Danger",
};

#[derive(Debug, Clone, FromRow)]
pub struct RecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub about: String,
    pub created_at: OffsetDateTime,
}

pub async fn find_by_id(
    db: &PgPool,
    store: RecordStore,
    id: Uuid,
) -> anyhow::Result<Option<RecordRow>> {
    let sql = format!(
        "SELECT id, user_id, about, created_at FROM {} WHERE id = $1",
        store.table
    );
    let row = sqlx::query_as::<_, RecordRow>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

pub async fn list_by_user(
    db: &PgPool,
    store: RecordStore,
    user_id: Uuid,
) -> anyhow::Result<Vec<RecordItem>> {
    let sql = format!(
        "SELECT id, about FROM {} WHERE user_id = $1 ORDER BY created_at",
        store.table
    );
    let rows = sqlx::query_as::<_, RecordItem>(&sql)
        .bind(user_id)
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn insert_many(
    db: &PgPool,
    store: RecordStore,
    user_id: Uuid,
    abouts: &[String],
) -> anyhow::Result<()> {
    let sql = format!(
        "INSERT INTO {} (user_id, about) SELECT $1, unnest($2::text[])",
        store.table
    );
    sqlx::query(&sql)
        .bind(user_id)
        .bind(abouts)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn update_about(
    db: &PgPool,
    store: RecordStore,
    id: Uuid,
    about: &str,
) -> anyhow::Result<()> {
    let sql = format!("UPDATE {} SET about = $2 WHERE id = $1", store.table);
    sqlx::query(&sql).bind(id).bind(about).execute(db).await?;
    Ok(())
}

pub async fn existing_ids(
    db: &PgPool,
    store: RecordStore,
    ids: &[Uuid],
) -> anyhow::Result<Vec<Uuid>> {
    let sql = format!("SELECT id FROM {} WHERE id = ANY($1)", store.table);
    let rows: Vec<(Uuid,)> = sqlx::query_as(&sql).bind(ids).fetch_all(db).await?;
    Ok(rows.into_iter().map(|r| r.0).collect())
}

pub async fn delete_by_id(db: &PgPool, store: RecordStore, id: Uuid) -> anyhow::Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = $1", store.table);
    sqlx::query(&sql).bind(id).execute(db).await?;
    Ok(())
}

pub async fn delete_many(db: &PgPool, store: RecordStore, ids: &[Uuid]) -> anyhow::Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ANY($1)", store.table);
    sqlx::query(&sql).bind(ids).execute(db).await?;
    Ok(())
}
