use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::announcements::model::{Announcement, CreateAnnouncementDto};
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;

pub struct AnnouncementService;

impl AnnouncementService {
    #[instrument(skip(db, dto))]
    pub async fn create_announcement(
        db: &PgPool,
        dto: CreateAnnouncementDto,
    ) -> Result<Announcement, AppError> {
        UserRepository::find_by_id(db, dto.author_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Author not found")))?;

        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (author_id, title, content) \
             VALUES ($1, $2, $3) \
             RETURNING id, author_id, title, content, created_at",
        )
        .bind(dto.author_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .context("Failed to insert announcement")
        .map_err(AppError::database)
    }

    /// Newest announcements first.
    #[instrument(skip(db))]
    pub async fn get_announcements(db: &PgPool) -> Result<Vec<Announcement>, AppError> {
        sqlx::query_as::<_, Announcement>(
            "SELECT id, author_id, title, content, created_at \
             FROM announcements \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch announcements")
        .map_err(AppError::database)
    }
}
