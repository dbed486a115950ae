//! Application configuration.
//!
//! Configuration is loaded from environment variables (via dotenvy in
//! development). See [`database`] for the connection pool setup.

pub mod database;
