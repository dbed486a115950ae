//! User data models and DTOs.
//!
//! [`User`] is the account entity as exposed by the API: it mirrors the
//! `users` table minus the `password` column, which is never selected
//! outside the login path. Role-scoped optional fields (student vs
//! staff/principal) live on the same row, as in the original schema.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Account role. Gates which optional profile fields apply and which
/// update operations are permitted.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    #[default]
    User,
    Student,
    Staff,
    Principal,
    Admin,
}

impl Role {
    /// Staff-family roles share the staff profile fields and the
    /// staff-details update operation.
    pub fn is_staff_family(&self) -> bool {
        matches!(self, Role::Staff | Role::Principal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Principal => "Principal",
            Role::Admin => "Admin",
        }
    }
}

/// An account, projected without its password hash.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub register_number: String,
    pub phone: String,
    pub role: Role,
    pub is_active: bool,
    /// Derived: true iff the role-appropriate identifying field is filled
    /// (student_class for students, qualification for staff/principals).
    /// Never client-settable.
    pub profile_completed: bool,

    // Student profile fields
    pub student_class: Option<String>,
    pub stream: Option<String>,
    pub year: Option<String>,
    pub department: Option<String>,

    // Staff / Principal profile fields
    pub qualification: Option<String>,
    pub subject_expertise: Option<String>,
    pub assigned_classes: Option<String>,
    pub experience_years: Option<i32>,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Login-path row: the projection plus the stored hash. Only the auth
/// service ever sees this.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password: String,
}

/// Fields for inserting a new account. `password` must already be hashed
/// by the time this struct exists.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub register_number: String,
    pub phone: String,
    pub role: Role,
    pub password: String,
}

/// DTO for the staff-details update operation.
///
/// Partial semantics: absent or empty-string fields leave the stored
/// values untouched. `experience_years` is accepted as a string or an
/// integer and must parse as an integer >= 0.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStaffDetailsDto {
    pub user_id: i64,
    pub qualification: Option<String>,
    pub subject_expertise: Option<String>,
    pub assigned_classes: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub experience_years: Option<serde_json::Value>,
}

/// DTO for the student-details update operation. Same partial semantics
/// as [`UpdateStaffDetailsDto`].
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDetailsDto {
    pub user_id: i64,
    pub student_class: Option<String>,
    pub stream: Option<String>,
    pub year: Option<String>,
    pub department: Option<String>,
}

/// `{success, message?, user}` envelope around a single account.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: User,
}

impl UserEnvelope {
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            message: None,
            user,
        }
    }

    pub fn with_message(user: User, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            user,
        }
    }
}

/// `{success, count, users}` envelope for the listing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}
