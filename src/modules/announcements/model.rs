use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Announcement {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAnnouncementDto {
    pub author_id: i64,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnnouncementEnvelope {
    pub success: bool,
    pub message: String,
    pub announcement: Announcement,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnnouncementsListResponse {
    pub success: bool,
    pub count: usize,
    pub announcements: Vec<Announcement>,
}
