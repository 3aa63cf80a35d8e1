use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub about: Option<String>,
    pub neurodivergence: Option<String>,
    pub created_at: OffsetDateTime,
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, about, neurodivergence, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, about, neurodivergence, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

pub async fn insert(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    about: Option<&str>,
    neurodivergence: Option<&str>,
) -> anyhow::Result<Uuid> {
    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password_hash, about, neurodivergence)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(about)
    .bind(neurodivergence)
    .fetch_one(db)
    .await?;
    Ok(row.0)
}

pub async fn update_profile(
    db: &PgPool,
    id: Uuid,
    name: &str,
    email: &str,
    password_hash: &str,
    about: &str,
    neurodivergence: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET name = $2, email = $3, password_hash = $4, about = $5, neurodivergence = $6
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(about)
    .bind(neurodivergence)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn update_about(db: &PgPool, id: Uuid, about: &str) -> anyhow::Result<()> {
    sqlx::query("UPDATE users SET about = $2 WHERE id = $1")
        .bind(id)
        .bind(about)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn update_neurodivergence(
    db: &PgPool,
    id: Uuid,
    neurodivergence: &str,
) -> anyhow::Result<()> {
    sqlx::query("UPDATE users SET neurodivergence = $2 WHERE id = $1")
        .bind(id)
        .bind(neurodivergence)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
