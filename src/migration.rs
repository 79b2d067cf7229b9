//! Forward-only schema migrations, recorded in `_schema_migrations`.
//! Each pending migration runs in its own transaction together with its bookkeeping row.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Ordered by version; never edit an entry once released, append a new one.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_books",
        sql: r#"
            CREATE TABLE IF NOT EXISTS books (
                id UUID PRIMARY KEY,
                title TEXT NOT NULL,
                author_name TEXT NOT NULL,
                page_count INTEGER NOT NULL DEFAULT 0 CHECK (page_count >= 0)
            )
        "#,
    },
    Migration {
        version: 2,
        name: "books_title_index",
        sql: "CREATE INDEX IF NOT EXISTS books_title_idx ON books (title DESC)",
    },
];

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppliedMigration {
    pub version: i64,
    pub name: String,
    pub applied_at: DateTime<Utc>,
}

const CREATE_LEDGER: &str = r#"
    CREATE TABLE IF NOT EXISTS _schema_migrations (
        version BIGINT PRIMARY KEY,
        name TEXT NOT NULL,
        applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Migrations from `all` whose version is not in `applied`, in version order.
pub fn pending<'a>(all: &'a [Migration], applied: &[i64]) -> Vec<&'a Migration> {
    let mut out: Vec<&Migration> = all.iter().filter(|m| !applied.contains(&m.version)).collect();
    out.sort_by_key(|m| m.version);
    out
}

/// Apply every pending migration. Returns the versions applied by this call.
pub async fn apply_migrations(pool: &PgPool) -> Result<Vec<i64>, AppError> {
    sqlx::query(CREATE_LEDGER).execute(pool).await?;
    let applied: Vec<i64> = sqlx::query_scalar("SELECT version FROM _schema_migrations")
        .fetch_all(pool)
        .await?;

    let mut done = Vec::new();
    for m in pending(MIGRATIONS, &applied) {
        tracing::info!(version = m.version, name = m.name, "applying migration");
        let mut tx = pool.begin().await?;
        sqlx::query(m.sql).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO _schema_migrations (version, name) VALUES ($1, $2)")
            .bind(m.version)
            .bind(m.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        done.push(m.version);
    }
    Ok(done)
}

pub async fn applied_migrations(pool: &PgPool) -> Result<Vec<AppliedMigration>, AppError> {
    let rows = sqlx::query_as::<_, AppliedMigration>(
        "SELECT version, name, applied_at FROM _schema_migrations ORDER BY version",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
