//! Account reads and role-gated profile updates.
//!
//! The two update operations are symmetric: each is only permitted for its
//! role family, applies partial-update semantics (absent or empty-string
//! fields leave stored values untouched), and recomputes
//! `profile_completed` from the role-appropriate identifying field before
//! persisting.

use sqlx::PgPool;
use tracing::instrument;

use crate::modules::users::model::{Role, UpdateStaffDetailsDto, UpdateStudentDetailsDto, User};
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        UserRepository::list_all(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        UserRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_staff_details(
        db: &PgPool,
        dto: UpdateStaffDetailsDto,
    ) -> Result<User, AppError> {
        let mut user = Self::get_user(db, dto.user_id).await?;

        if !user.role.is_staff_family() {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Only Staff and Principal accounts can update staff details"
            )));
        }

        // Validate before mutating anything.
        let experience_years = parse_experience_years(dto.experience_years.as_ref())?;

        user.qualification = merge_field(user.qualification, dto.qualification);
        user.subject_expertise = merge_field(user.subject_expertise, dto.subject_expertise);
        user.assigned_classes = merge_field(user.assigned_classes, dto.assigned_classes);
        if let Some(years) = experience_years {
            user.experience_years = Some(years);
        }

        user.profile_completed = is_filled(user.qualification.as_deref());

        UserRepository::save_profile(db, &user).await
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student_details(
        db: &PgPool,
        dto: UpdateStudentDetailsDto,
    ) -> Result<User, AppError> {
        let mut user = Self::get_user(db, dto.user_id).await?;

        if user.role != Role::Student {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Only Student accounts can update student details"
            )));
        }

        user.student_class = merge_field(user.student_class, dto.student_class);
        user.stream = merge_field(user.stream, dto.stream);
        user.year = merge_field(user.year, dto.year);
        user.department = merge_field(user.department, dto.department);

        user.profile_completed = is_filled(user.student_class.as_deref());

        UserRepository::save_profile(db, &user).await
    }
}

/// Partial-update rule: an absent or blank incoming value keeps the
/// stored one.
fn merge_field(current: Option<String>, incoming: Option<String>) -> Option<String> {
    match incoming {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => current,
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Strict parse of the `experience_years` field.
///
/// Clients send it as a JSON string ("8") or a bare integer. A blank
/// string means "leave unchanged"; anything else must be an integer >= 0.
/// No silent coercion of fractions or negatives.
fn parse_experience_years(
    value: Option<&serde_json::Value>,
) -> Result<Option<i32>, AppError> {
    let invalid =
        || AppError::bad_request(anyhow::anyhow!("experience_years must be a non-negative integer"));

    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => {
            if s.trim().is_empty() {
                return Ok(None);
            }
            let years: i32 = s.trim().parse().map_err(|_| invalid())?;
            if years < 0 {
                return Err(invalid());
            }
            Ok(Some(years))
        }
        Some(serde_json::Value::Number(n)) => {
            let years = n.as_i64().ok_or_else(invalid)?;
            let years = i32::try_from(years).map_err(|_| invalid())?;
            if years < 0 {
                return Err(invalid());
            }
            Ok(Some(years))
        }
        Some(_) => Err(invalid()),
    }
}
