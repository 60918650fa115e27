//! Generation endpoint
//!
//! Parses the path parameters, refuses ids that already exist, and hands
//! the actual maze construction to `mazevault-gen`. The returned body is
//! stored verbatim; this layer never looks inside it.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mazevault_gen::Maze;

use super::mazes::MazeResponse;
use crate::db::MazeRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ChallengeLevel, MazeId};

/// GET /generate/{height}/{width}/{seed}/{challenge_level}
async fn generate_with_challenge(
    State(state): State<Arc<AppState>>,
    Path((height, width, seed, challenge)): Path<(String, String, String, String)>,
) -> Result<(StatusCode, Json<MazeResponse>), ApiError> {
    let id = MazeId::from_parts(&height, &width, &seed)?;
    let challenge = ChallengeLevel::parse(&challenge)?;
    generate(state, id, challenge).await
}

/// GET /generate/{height}/{width}/{seed} - challenge level defaults to 0
async fn generate_default_challenge(
    State(state): State<Arc<AppState>>,
    Path((height, width, seed)): Path<(String, String, String)>,
) -> Result<(StatusCode, Json<MazeResponse>), ApiError> {
    let id = MazeId::from_parts(&height, &width, &seed)?;
    generate(state, id, ChallengeLevel::default()).await
}

async fn generate(
    state: Arc<AppState>,
    id: MazeId,
    challenge: ChallengeLevel,
) -> Result<(StatusCode, Json<MazeResponse>), ApiError> {
    let repo = MazeRepo::new(&state.pool);

    if repo.exists(id.as_str()).await? {
        return Err(ApiError::Conflict {
            id: id.as_str().to_owned(),
        });
    }

    let maze = Maze::generate(id.height(), id.width(), id.seed() as u64)?;
    let body = maze.to_body();

    let record = repo.insert(&id, challenge, &body).await?;
    tracing::info!(id = %record.id, "maze generated");

    Ok((StatusCode::CREATED, Json(MazeResponse::from(record))))
}

/// Generation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/generate/{height}/{width}/{seed}",
            get(generate_default_challenge),
        )
        .route(
            "/generate/{height}/{width}/{seed}/{challenge_level}",
            get(generate_with_challenge),
        )
}
