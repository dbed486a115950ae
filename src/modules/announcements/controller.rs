use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use super::model::{AnnouncementEnvelope, AnnouncementsListResponse, CreateAnnouncementDto};
use super::service::AnnouncementService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create an announcement
#[utoipa::path(
    post,
    path = "/api/announcements",
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementEnvelope),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Announcements"
)]
#[instrument(skip(state, dto))]
pub async fn create_announcement(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAnnouncementDto>,
) -> Result<(StatusCode, Json<AnnouncementEnvelope>), AppError> {
    let announcement = AnnouncementService::create_announcement(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(AnnouncementEnvelope {
            success: true,
            message: "Announcement created successfully".to_string(),
            announcement,
        }),
    ))
}

/// List announcements, newest first
#[utoipa::path(
    get,
    path = "/api/announcements",
    responses(
        (status = 200, description = "List of announcements", body = AnnouncementsListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Announcements"
)]
#[instrument(skip(state))]
pub async fn get_announcements(
    State(state): State<AppState>,
) -> Result<Json<AnnouncementsListResponse>, AppError> {
    let announcements = AnnouncementService::get_announcements(&state.db).await?;
    Ok(Json(AnnouncementsListResponse {
        success: true,
        count: announcements.len(),
        announcements,
    }))
}
