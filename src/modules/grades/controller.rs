use axum::{Json, extract::Path, extract::State, http::StatusCode};
use tracing::instrument;

use super::model::{GradeEnvelope, GradesListResponse, RecordGradeDto};
use super::service::GradeService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Record a grade for a student
#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = RecordGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = GradeEnvelope),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Student or class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn record_grade(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RecordGradeDto>,
) -> Result<(StatusCode, Json<GradeEnvelope>), AppError> {
    let grade = GradeService::record_grade(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(GradeEnvelope {
            success: true,
            message: "Grade recorded successfully".to_string(),
            grade,
        }),
    ))
}

/// List grades for a student
#[utoipa::path(
    get,
    path = "/api/grades/student/{student_id}",
    params(("student_id" = i64, Path, description = "Student user ID")),
    responses(
        (status = 200, description = "Grades for the student", body = GradesListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_student_grades(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<Json<GradesListResponse>, AppError> {
    let grades = GradeService::get_student_grades(&state.db, student_id).await?;
    Ok(Json(GradesListResponse {
        success: true,
        count: grades.len(),
        grades,
    }))
}
