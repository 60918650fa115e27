//! Repository implementations for database access

pub mod mazes;

pub use mazes::{DbError, MazeRecord, MazeRepo, MazeSummary};
