use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::grades::model::{Grade, RecordGradeDto, grade_letter_for};
use crate::modules::users::model::Role;
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db, dto))]
    pub async fn record_grade(db: &PgPool, dto: RecordGradeDto) -> Result<Grade, AppError> {
        let student = UserRepository::find_by_id(db, dto.student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        if student.role != Role::Student {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Grades can only be recorded for Student accounts"
            )));
        }

        let class_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM classes WHERE id = $1)")
                .bind(dto.class_id)
                .fetch_one(db)
                .await
                .context("Failed to check class existence")
                .map_err(AppError::database)?;

        if !class_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        // Client-supplied grade_letter is discarded; the letter is derived
        // from the score on every save.
        let grade_letter = grade_letter_for(dto.score);

        sqlx::query_as::<_, Grade>(
            "INSERT INTO grades (student_id, class_id, subject, score, grade_letter) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, student_id, class_id, subject, score, grade_letter, \
                       created_at, updated_at",
        )
        .bind(dto.student_id)
        .bind(dto.class_id)
        .bind(&dto.subject)
        .bind(dto.score)
        .bind(grade_letter)
        .fetch_one(db)
        .await
        .context("Failed to insert grade")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_student_grades(db: &PgPool, student_id: i64) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, class_id, subject, score, grade_letter, \
                    created_at, updated_at \
             FROM grades WHERE student_id = $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch student grades")
        .map_err(AppError::database)
    }
}
