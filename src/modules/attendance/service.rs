use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::attendance::model::{Attendance, MarkAttendanceDto};
use crate::modules::users::model::Role;
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(db, dto))]
    pub async fn mark_attendance(
        db: &PgPool,
        dto: MarkAttendanceDto,
    ) -> Result<Attendance, AppError> {
        let student = UserRepository::find_by_id(db, dto.student_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        if student.role != Role::Student {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Attendance can only be recorded for Student accounts"
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

        sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (student_id, class_id, date, present) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, student_id, class_id, date, present, created_at",
        )
        .bind(dto.student_id)
        .bind(dto.class_id)
        .bind(dto.date)
        .bind(dto.present)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Attendance already recorded for this student, class, and date"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }

    #[instrument(skip(db))]
    pub async fn get_class_attendance(
        db: &PgPool,
        class_id: i64,
    ) -> Result<Vec<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>(
            "SELECT id, student_id, class_id, date, present, created_at \
             FROM attendance WHERE class_id = $1 \
             ORDER BY date DESC, student_id",
        )
        .bind(class_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch class attendance")
        .map_err(AppError::database)
    }
}
