//! Route handlers organized by resource

pub mod generate;
pub mod health;
pub mod mazes;
pub mod view;
