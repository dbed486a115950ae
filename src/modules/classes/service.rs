use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::classes::model::{Class, CreateClassDto, EnrollStudentDto, Enrollment};
use crate::modules::users::model::Role;
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        let teacher = UserRepository::find_by_id(db, dto.teacher_id)
            .await?
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Teacher not found")))?;

        if !teacher.role.is_staff_family() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Class teacher must be a Staff or Principal account"
            )));
        }

        sqlx::query_as::<_, Class>(
            "INSERT INTO classes (name, teacher_id) VALUES ($1, $2) \
             RETURNING id, name, teacher_id, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .context("Failed to insert class")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT id, name, teacher_id, created_at, updated_at FROM classes \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch classes")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn enroll_student(
        db: &PgPool,
        class_id: i64,
        dto: EnrollStudentDto,
    ) -> Result<Enrollment, AppError> {
        let class_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM classes WHERE id = $1)")
                .bind(class_id)
                .fetch_one(db)
                .await
                .context("Failed to check class existence")
                .map_err(AppError::database)?;

        if !class_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        let student = UserRepository::find_by_id(db, dto.student_id)
            .await?
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Student not found")))?;

        if student.role != Role::Student {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Only Student accounts can be enrolled in a class"
            )));
        }

        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (student_id, class_id) VALUES ($1, $2) \
             RETURNING id, student_id, class_id, created_at",
        )
        .bind(dto.student_id)
        .bind(class_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Student is already enrolled in this class"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })
    }
}
