//! Schema setup for the maze store

use sqlx::SqlitePool;

/// Create the mazes table and indexes if absent.
///
/// `id` deliberately carries no UNIQUE constraint: ids are expected unique
/// but duplicate rows are tolerated, and readers take the first match.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running maze store migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mazes (
            id TEXT NOT NULL,
            height INTEGER NOT NULL,
            width INTEGER NOT NULL,
            seed INTEGER NOT NULL,
            challenge_level INTEGER NOT NULL DEFAULT 0,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_mazes_id ON mazes(id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_mazes_created ON mazes(created_at)")
        .execute(pool)
        .await?;

    Ok(())
}
