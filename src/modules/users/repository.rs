//! The user directory: all SQL touching the `users` table.
//!
//! Services own the rules; this type owns the queries. Uniqueness is
//! enforced by the database and classified here by violated constraint
//! name rather than by matching error message text.

use anyhow::Context;
use sqlx::PgPool;

use crate::modules::users::model::{NewUser, Role, User, UserCredentials};
use crate::utils::errors::AppError;

/// Every column of `users` except `password`.
const USER_COLUMNS: &str = "id, first_name, last_name, email, register_number, phone, role, \
     is_active, profile_completed, student_class, stream, year, department, \
     qualification, subject_expertise, assigned_classes, experience_years, \
     created_at, updated_at";

pub struct UserRepository;

impl UserRepository {
    pub async fn create(db: &PgPool, new_user: &NewUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (first_name, last_name, email, register_number, phone, role, password) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.first_name)
            .bind(&new_user.last_name)
            .bind(&new_user.email)
            .bind(&new_user.register_number)
            .bind(&new_user.phone)
            .bind(new_user.role)
            .bind(&new_user.password)
            .fetch_one(db)
            .await
            .map_err(map_unique_violation)
    }

    pub async fn find_by_email_and_role(
        db: &PgPool,
        email: &str,
        role: Role,
    ) -> Result<Option<UserCredentials>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS}, password FROM users WHERE email = $1 AND role = $2");

        sqlx::query_as::<_, UserCredentials>(&sql)
            .bind(email)
            .bind(role)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by email and role")
            .map_err(AppError::database)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by ID")
            .map_err(AppError::database)
    }

    /// All accounts, newest-created-first.
    pub async fn list_all(db: &PgPool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC");

        sqlx::query_as::<_, User>(&sql)
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)
    }

    /// Re-persists the profile fields of a merged account and re-stamps
    /// `updated_at`. The password column is deliberately not touched.
    pub async fn save_profile(db: &PgPool, user: &User) -> Result<User, AppError> {
        let sql = format!(
            "UPDATE users SET \
                student_class = $1, stream = $2, year = $3, department = $4, \
                qualification = $5, subject_expertise = $6, assigned_classes = $7, \
                experience_years = $8, profile_completed = $9, updated_at = NOW() \
             WHERE id = $10 \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&user.student_class)
            .bind(&user.stream)
            .bind(&user.year)
            .bind(&user.department)
            .bind(&user.qualification)
            .bind(&user.subject_expertise)
            .bind(&user.assigned_classes)
            .bind(user.experience_years)
            .bind(user.profile_completed)
            .bind(user.id)
            .fetch_one(db)
            .await
            .context("Failed to save user profile")
            .map_err(AppError::database)
    }
}

/// Maps a unique-constraint violation to the 400 naming the field that
/// collided; anything else stays a database error.
fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_email_key") => {
                    AppError::bad_request(anyhow::anyhow!("Email already registered"))
                }
                Some("users_register_number_key") => {
                    AppError::bad_request(anyhow::anyhow!("Register number already exists"))
                }
                _ => AppError::bad_request(anyhow::anyhow!("Duplicate value")),
            };
        }
    }
    AppError::database(anyhow::Error::from(e))
}
