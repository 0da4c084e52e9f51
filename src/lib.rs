//! Loyalty Points API Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::create_pool;
pub use error::{AppError, Result};

/// Application state shared across all handlers
///
/// Carries the dependency-injected data-access handle; each request
/// borrows a pooled connection for exactly the lifetime of its read.
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::PgPool,
}

impl AppState {
    /// Create a new AppState over the given connection pool
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}
