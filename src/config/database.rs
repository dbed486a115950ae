//! Database configuration and connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the connection
//! cannot be established; there is nothing useful the server can do without
//! a database.

use sqlx::PgPool;
use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// Called once during startup; the returned pool is cheaply cloneable and
/// lives in [`crate::state::AppState`].
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
