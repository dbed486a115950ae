//! # CampusMedia API
//!
//! A campus-management backend built with Axum and PostgreSQL: user
//! registration and login with role-based profiles, role-gated partial
//! profile updates with a derived profile-completion flag, and simple
//! academic records (classes, enrollments, attendance, grades,
//! announcements).
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Database pool configuration
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and credential login
//! │   ├── users/       # Account directory and profile updates
//! │   ├── classes/     # Classes and enrollments
//! │   ├── attendance/  # Per-day attendance records
//! │   ├── grades/      # Grades with derived letter
//! │   └── announcements/
//! └── utils/            # Shared utilities (errors, password hashing)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! The users module additionally carries `repository.rs`, which owns every
//! query against the `users` table; services never write SQL for accounts
//! themselves.
//!
//! ## Authentication model
//!
//! There are no sessions or tokens: every request carries full credentials.
//! Login validates an `(email, password, role)` triple. A role mismatch and
//! an unknown email are deliberately indistinguishable; a deactivated
//! account is only reported as disabled after it was correctly identified.
//!
//! ## Security considerations
//!
//! - Passwords are hashed with bcrypt and never stored or returned raw
//! - API projections of accounts never include the password column
//! - Password writes pass through a re-hash guard so a stored hash is
//!   never hashed again

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
