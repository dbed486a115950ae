//! Registration and login.
//!
//! Login identifies an account by the (email, role) pair. A role mismatch
//! is indistinguishable from a nonexistent account: both fail with the
//! same "Invalid credentials" error, so a caller learns nothing about
//! which part was wrong. A deactivated account is only reported as
//! disabled after it was correctly identified and its password verified.

use sqlx::PgPool;
use tracing::instrument;

use crate::modules::auth::model::{LoginRequest, RegisterRequestDto};
use crate::modules::users::model::{NewUser, User};
use crate::modules::users::repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        if !dto.phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "phone must contain only digits"
            )));
        }

        // The raw password lives only as long as this request; the hash is
        // what gets handed to the directory.
        let hashed_password = hash_password(&dto.password)?;

        let new_user = NewUser {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            register_number: dto.register_number,
            phone: dto.phone,
            role: dto.role,
            password: hashed_password,
        };

        UserRepository::create(db, &new_user).await
    }

    #[instrument(skip(db, dto))]
    pub async fn login(db: &PgPool, dto: LoginRequest) -> Result<User, AppError> {
        let invalid_credentials =
            || AppError::unauthorized(anyhow::anyhow!("Invalid credentials"));

        let credentials =
            UserRepository::find_by_email_and_role(db, &dto.email, dto.role)
                .await?
                .ok_or_else(invalid_credentials)?;

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(invalid_credentials());
        }

        if !credentials.user.is_active {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "User account is disabled"
            )));
        }

        Ok(credentials.user)
    }
}
