//! mazevault-server: HTTP service for stored maze records
//!
//! Thin serving layer over a SQLite maze store. Maze generation itself lives
//! in `mazevault-gen`; this crate only parses request parameters, runs the
//! database queries, and shapes JSON/HTML responses.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use http::{build_router, run_server, ApiError, AppState};
