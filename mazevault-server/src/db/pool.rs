//! SQLite connection pool management

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for a single-file SQLite database.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool, creating the database file if needed.
///
/// # Arguments
///
/// * `database_url` - connection string, e.g. `sqlite:mazevault.db`
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Create an in-memory pool for tests.
///
/// Limited to a single connection: each in-memory SQLite connection is its
/// own database, so a wider pool would scatter tables across connections.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    // The connection must never be recycled or the database vanishes.
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_pool_executes_queries() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mazes.db");
        let url = format!("sqlite:{}", path.display());

        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 41 + 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 42);
        assert!(path.exists());
    }
}
