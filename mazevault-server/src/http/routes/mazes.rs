//! Maze record endpoints: fetch, list, delete

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::db::{MazeRecord, MazeRepo, MazeSummary};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{MazeId, Paginated, Pagination, PaginationParams};

/// Full maze record response, body included
#[derive(Serialize)]
pub struct MazeResponse {
    pub id: String,
    pub height: i64,
    pub width: i64,
    pub seed: i64,
    pub challenge_level: i64,
    pub created_at: String,
    pub body: JsonValue,
}

impl From<MazeRecord> for MazeResponse {
    fn from(r: MazeRecord) -> Self {
        Self {
            id: r.id,
            height: r.height,
            width: r.width,
            seed: r.seed,
            challenge_level: r.challenge_level,
            created_at: r.created_at.to_rfc3339(),
            body: r.body,
        }
    }
}

/// Summary response for listings (no body)
#[derive(Serialize)]
pub struct MazeSummaryResponse {
    pub id: String,
    pub height: i64,
    pub width: i64,
    pub seed: i64,
    pub challenge_level: i64,
    pub created_at: String,
}

impl From<MazeSummary> for MazeSummaryResponse {
    fn from(s: MazeSummary) -> Self {
        Self {
            id: s.id,
            height: s.height,
            width: s.width,
            seed: s.seed,
            challenge_level: s.challenge_level,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// Delete outcome
#[derive(Serialize)]
pub struct DeleteResponse {
    pub id: String,
    /// Number of rows removed; more than one when duplicates existed
    pub deleted: u64,
}

/// GET /get/{maze_id} - first record matching the id
async fn get_maze(
    State(state): State<Arc<AppState>>,
    Path(maze_id): Path<String>,
) -> Result<Json<MazeResponse>, ApiError> {
    let id = MazeId::parse(&maze_id)?;
    let record = MazeRepo::new(&state.pool)
        .first(id.as_str())
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "maze",
            id: id.as_str().to_owned(),
        })?;

    Ok(Json(MazeResponse::from(record)))
}

/// GET /list - paginated record summaries
async fn list_mazes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Paginated<MazeSummaryResponse>>, ApiError> {
    let page = Pagination::from(params);
    let result = MazeRepo::new(&state.pool).list(page).await?;

    Ok(Json(Paginated {
        items: result
            .items
            .into_iter()
            .map(MazeSummaryResponse::from)
            .collect(),
        total: result.total,
        page: result.page,
        per_page: result.per_page,
    }))
}

/// GET|DELETE /delete/{maze_id}/{password}
///
/// Password is checked before existence, so a bad password on a missing
/// maze is a 401, not a 404. Removes every row for the id.
async fn delete_maze(
    State(state): State<Arc<AppState>>,
    Path((maze_id, password)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if password != state.delete_password {
        return Err(ApiError::Unauthorized);
    }

    let id = MazeId::parse(&maze_id)?;
    let deleted = MazeRepo::new(&state.pool).delete(id.as_str()).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound {
            resource: "maze",
            id: id.as_str().to_owned(),
        });
    }

    Ok(Json(DeleteResponse {
        id: id.as_str().to_owned(),
        deleted,
    }))
}

/// Maze record routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get/{maze_id}", get(get_maze))
        .route("/list", get(list_mazes))
        // GET kept alongside DELETE so the endpoint works from a browser
        .route(
            "/delete/{maze_id}/{password}",
            get(delete_maze).delete(delete_maze),
        )
}
