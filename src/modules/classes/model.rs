use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A class taught by a staff member.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A student's membership in a class. Unique per (student, class).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub teacher_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollStudentDto {
    pub student_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassEnvelope {
    pub success: bool,
    pub message: String,
    pub class: Class,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassesListResponse {
    pub success: bool,
    pub count: usize,
    pub classes: Vec<Class>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentEnvelope {
    pub success: bool,
    pub message: String,
    pub enrollment: Enrollment,
}
