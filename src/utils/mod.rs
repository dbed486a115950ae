//! Shared utilities.
//!
//! - [`errors`]: application error type and HTTP mapping
//! - [`password`]: bcrypt hashing, verification, and the re-hash guard

pub mod errors;
pub mod password;
