use axum::{Json, extract::Path, extract::State, http::StatusCode};
use tracing::instrument;

use super::model::{AttendanceEnvelope, AttendanceListResponse, MarkAttendanceDto};
use super::service::AttendanceService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Mark attendance for a student in a class on a date
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceEnvelope),
        (status = 400, description = "Not a student or already recorded", body = ErrorResponse),
        (status = 404, description = "Student or class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state, dto))]
pub async fn mark_attendance(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<MarkAttendanceDto>,
) -> Result<(StatusCode, Json<AttendanceEnvelope>), AppError> {
    let attendance = AttendanceService::mark_attendance(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(AttendanceEnvelope {
            success: true,
            message: "Attendance recorded successfully".to_string(),
            attendance,
        }),
    ))
}

/// List attendance records for a class
#[utoipa::path(
    get,
    path = "/api/attendance/class/{class_id}",
    params(("class_id" = i64, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Attendance records", body = AttendanceListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn get_class_attendance(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Result<Json<AttendanceListResponse>, AppError> {
    let attendance = AttendanceService::get_class_attendance(&state.db, class_id).await?;
    Ok(Json(AttendanceListResponse {
        success: true,
        count: attendance.len(),
        attendance,
    }))
}
