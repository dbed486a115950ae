use axum::{Json, extract::Path, extract::State, http::StatusCode};
use tracing::instrument;

use super::model::{
    ClassEnvelope, ClassesListResponse, CreateClassDto, EnrollStudentDto, EnrollmentEnvelope,
};
use super::service::ClassService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a class
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = ClassEnvelope),
        (status = 400, description = "Validation error or teacher is not staff", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<ClassEnvelope>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassEnvelope {
            success: true,
            message: "Class created successfully".to_string(),
            class,
        }),
    ))
}

/// List classes
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "List of classes", body = ClassesListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
) -> Result<Json<ClassesListResponse>, AppError> {
    let classes = ClassService::get_classes(&state.db).await?;
    Ok(Json(ClassesListResponse {
        success: true,
        count: classes.len(),
        classes,
    }))
}

/// Enroll a student in a class
#[utoipa::path(
    post,
    path = "/api/classes/{id}/enroll",
    params(("id" = i64, Path, description = "Class ID")),
    request_body = EnrollStudentDto,
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentEnvelope),
        (status = 400, description = "Not a student or already enrolled", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(class_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<EnrollStudentDto>,
) -> Result<(StatusCode, Json<EnrollmentEnvelope>), AppError> {
    let enrollment = ClassService::enroll_student(&state.db, class_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(EnrollmentEnvelope {
            success: true,
            message: "Student enrolled successfully".to_string(),
            enrollment,
        }),
    ))
}
