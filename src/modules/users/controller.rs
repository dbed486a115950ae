use axum::{Json, extract::Path, extract::State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    UpdateStaffDetailsDto, UpdateStudentDetailsDto, UserEnvelope, UsersListResponse,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get all users, newest-created-first
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = UsersListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<UsersListResponse>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(UsersListResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// Get a single user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(UserEnvelope::new(user)))
}

/// Update staff profile details (Staff and Principal accounts only)
#[utoipa::path(
    post,
    path = "/api/users/update-staff-details",
    request_body = UpdateStaffDetailsDto,
    responses(
        (status = 200, description = "Staff details updated", body = UserEnvelope),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Account is not Staff or Principal", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_staff_details(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateStaffDetailsDto>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = UserService::update_staff_details(&state.db, dto).await?;
    Ok(Json(UserEnvelope::with_message(
        user,
        "Staff details updated successfully",
    )))
}

/// Update student profile details (Student accounts only)
#[utoipa::path(
    post,
    path = "/api/users/update-student-details",
    request_body = UpdateStudentDetailsDto,
    responses(
        (status = 200, description = "Student details updated", body = UserEnvelope),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Account is not a Student", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_student_details(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDetailsDto>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = UserService::update_student_details(&state.db, dto).await?;
    Ok(Json(UserEnvelope::with_message(
        user,
        "Student details updated successfully",
    )))
}
