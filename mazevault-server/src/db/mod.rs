//! Database layer - connection pool, migrations, and the maze repository
//!
//! # Design Principles
//!
//! - Connection pool - no Arc<Mutex<Connection>>
//! - Single-query operations; existence checks and reads go through the
//!   repository, never ad-hoc SQL in handlers
//! - No UNIQUE constraint on maze ids: duplicates are tolerated and reads
//!   take the first match

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::{DbError, MazeRecord, MazeRepo, MazeSummary};
