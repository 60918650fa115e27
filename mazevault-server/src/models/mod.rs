//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod challenge;
pub mod maze_id;
pub mod pagination;
pub mod validation;

pub use challenge::ChallengeLevel;
pub use maze_id::MazeId;
pub use pagination::{Paginated, Pagination, PaginationParams};
pub use validation::ValidationError;
