//! Maze repository
//!
//! Ids are expected unique but the schema does not enforce it: reads order
//! by insert time and take the first match, deletes remove every row for
//! the id. The body column is opaque JSON written by the generator; this
//! layer round-trips it without interpreting it.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::{ChallengeLevel, MazeId, Paginated, Pagination};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("stored body for maze '{id}' is not valid JSON")]
    CorruptBody {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Full maze record, body included.
#[derive(Debug, Clone)]
pub struct MazeRecord {
    pub id: String,
    pub height: i64,
    pub width: i64,
    pub seed: i64,
    pub challenge_level: i64,
    pub body: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Maze record without the body, for listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MazeSummary {
    pub id: String,
    pub height: i64,
    pub width: i64,
    pub seed: i64,
    pub challenge_level: i64,
    pub created_at: DateTime<Utc>,
}

/// Maze repository
pub struct MazeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MazeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether any record exists for `id`.
    pub async fn exists(&self, id: &str) -> Result<bool, DbError> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM mazes WHERE id = ?1)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        Ok(found != 0)
    }

    /// Insert a new record and return it.
    pub async fn insert(
        &self,
        id: &MazeId,
        challenge_level: ChallengeLevel,
        body: &JsonValue,
    ) -> Result<MazeRecord, DbError> {
        let created_at = Utc::now();
        let body_text = body.to_string();

        sqlx::query(
            r#"
            INSERT INTO mazes (id, height, width, seed, challenge_level, body, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(id.as_str())
        .bind(id.height() as i64)
        .bind(id.width() as i64)
        .bind(id.seed())
        .bind(challenge_level.as_i64())
        .bind(&body_text)
        .bind(created_at)
        .execute(self.pool)
        .await?;

        Ok(MazeRecord {
            id: id.as_str().to_owned(),
            height: id.height() as i64,
            width: id.width() as i64,
            seed: id.seed(),
            challenge_level: challenge_level.as_i64(),
            body: body.clone(),
            created_at,
        })
    }

    /// First record matching `id`, oldest row wins when duplicates exist.
    pub async fn first(&self, id: &str) -> Result<Option<MazeRecord>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, height, width, seed, challenge_level, body, created_at
            FROM mazes
            WHERE id = ?1
            ORDER BY created_at ASC, rowid ASC
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(record_from_row).transpose()
    }

    /// List record summaries, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<MazeSummary>, DbError> {
        // COUNT(*) OVER() gets the total in the same query
        let rows = sqlx::query(
            r#"
            SELECT id, height, width, seed, challenge_level, created_at,
                   COUNT(*) OVER() AS total
            FROM mazes
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
        let items = rows
            .into_iter()
            .map(|r| MazeSummary {
                id: r.get("id"),
                height: r.get("height"),
                width: r.get("width"),
                seed: r.get("seed"),
                challenge_level: r.get("challenge_level"),
                created_at: r.get("created_at"),
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Total number of stored records, duplicates included.
    pub async fn count(&self) -> Result<i64, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mazes")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    /// Delete every record matching `id`, returning the removed count.
    pub async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM mazes WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn record_from_row(row: SqliteRow) -> Result<MazeRecord, DbError> {
    let id: String = row.get("id");
    let body_text: String = row.get("body");
    let body = serde_json::from_str(&body_text).map_err(|source| DbError::CorruptBody {
        id: id.clone(),
        source,
    })?;

    Ok(MazeRecord {
        id,
        height: row.get("height"),
        width: row.get("width"),
        seed: row.get("seed"),
        challenge_level: row.get("challenge_level"),
        body,
        created_at: row.get("created_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_memory_pool};
    use serde_json::json;

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    fn sample_id() -> MazeId {
        MazeId::new(4, 5, 9).unwrap()
    }

    #[tokio::test]
    async fn insert_then_first() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);
        let body = json!({"cells": [1, 2, 3], "ascii": "###"});

        assert!(!repo.exists("4:5:9").await.unwrap());
        let inserted = repo
            .insert(&sample_id(), ChallengeLevel::new(2).unwrap(), &body)
            .await
            .unwrap();
        assert!(repo.exists("4:5:9").await.unwrap());

        let fetched = repo.first("4:5:9").await.unwrap().expect("record");
        assert_eq!(fetched.id, inserted.id);
        assert_eq!(fetched.height, 4);
        assert_eq!(fetched.width, 5);
        assert_eq!(fetched.seed, 9);
        assert_eq!(fetched.challenge_level, 2);
        assert_eq!(fetched.body, body);
    }

    #[tokio::test]
    async fn first_returns_none_for_missing() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);
        assert!(repo.first("2:2:0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicates_first_match_wins() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);
        let id = sample_id();

        repo.insert(&id, ChallengeLevel::default(), &json!({"n": 1}))
            .await
            .unwrap();
        repo.insert(&id, ChallengeLevel::default(), &json!({"n": 2}))
            .await
            .unwrap();

        let fetched = repo.first(id.as_str()).await.unwrap().expect("record");
        assert_eq!(fetched.body, json!({"n": 1}));
    }

    #[tokio::test]
    async fn delete_removes_all_duplicates() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);
        let id = sample_id();

        repo.insert(&id, ChallengeLevel::default(), &json!({}))
            .await
            .unwrap();
        repo.insert(&id, ChallengeLevel::default(), &json!({}))
            .await
            .unwrap();

        assert_eq!(repo.delete(id.as_str()).await.unwrap(), 2);
        assert!(!repo.exists(id.as_str()).await.unwrap());
        assert_eq!(repo.delete(id.as_str()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_pages_newest_first() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);

        for seed in 0..3 {
            let id = MazeId::new(4, 4, seed).unwrap();
            repo.insert(&id, ChallengeLevel::default(), &json!({}))
                .await
                .unwrap();
        }

        let page = repo.list(Pagination::new(1, 2)).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "4:4:2");

        let page = repo.list(Pagination::new(2, 2)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "4:4:0");
    }

    #[tokio::test]
    async fn count_includes_duplicates() {
        let pool = test_pool().await;
        let repo = MazeRepo::new(&pool);
        let id = sample_id();

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.insert(&id, ChallengeLevel::default(), &json!({}))
            .await
            .unwrap();
        repo.insert(&id, ChallengeLevel::default(), &json!({}))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn corrupt_body_is_reported() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO mazes (id, height, width, seed, challenge_level, body, created_at)
             VALUES ('2:2:1', 2, 2, 1, 0, 'not json', ?1)",
        )
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

        let err = MazeRepo::new(&pool).first("2:2:1").await.unwrap_err();
        assert!(matches!(err, DbError::CorruptBody { .. }));
    }
}
