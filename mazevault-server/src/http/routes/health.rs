//! Health endpoint: liveness plus a look at the maze store
//!
//! Reports "degraded" instead of failing when the count query errors, so
//! probes can still distinguish a live-but-broken store from a dead server.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::MazeRepo;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Stored maze records, absent when the store is unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mazes: Option<i64>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, mazes) = match MazeRepo::new(&state.pool).count().await {
        Ok(n) => ("ok", Some(n)),
        Err(e) => {
            tracing::error!("health count query failed: {}", e);
            ("degraded", None)
        }
    };

    Json(HealthResponse {
        status,
        service: "mazevault",
        version: env!("CARGO_PKG_VERSION"),
        mazes,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    #[tokio::test]
    async fn health_reports_store_size() {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        let state = Arc::new(AppState {
            pool,
            delete_password: "pw".into(),
        });

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "mazevault");
        assert_eq!(body.mazes, Some(0));
    }

    #[tokio::test]
    async fn health_degrades_without_schema() {
        // No migrations: the count query has no table to hit
        let pool = create_memory_pool().await.unwrap();
        let state = Arc::new(AppState {
            pool,
            delete_password: "pw".into(),
        });

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "degraded");
        assert_eq!(body.mazes, None);
    }
}
