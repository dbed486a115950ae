use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// One attendance record. Unique per (student, class, date).
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    pub present: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MarkAttendanceDto {
    pub student_id: i64,
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    #[serde(default = "default_present")]
    pub present: bool,
}

fn default_present() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceEnvelope {
    pub success: bool,
    pub message: String,
    pub attendance: Attendance,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub success: bool,
    pub count: usize,
    pub attendance: Vec<Attendance>,
}
