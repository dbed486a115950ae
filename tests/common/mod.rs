use campusmedia::router::init_router;
use campusmedia::state::AppState;
use campusmedia::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(AppState { db: pool })
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("user-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_register_number() -> String {
    format!("REG-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub register_number: String,
    pub password: String,
}

/// Inserts a user directly, bypassing the registration endpoint.
/// `role` must be one of the `user_role` labels: User, Student, Staff,
/// Principal, Admin.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, role: &str, password: &str, is_active: bool) -> TestUser {
    let email = generate_unique_email();
    let register_number = generate_unique_register_number();
    let hashed = hash_password(password).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (first_name, last_name, email, register_number, phone, role, password, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6::user_role, $7, $8) \
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(&email)
    .bind(&register_number)
    .bind("9876543210")
    .bind(role)
    .bind(&hashed)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        register_number,
        password: password.to_string(),
    }
}

/// Inserts a class taught by the given user.
#[allow(dead_code)]
pub async fn create_test_class(pool: &PgPool, teacher_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO classes (name, teacher_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(format!("Class {}", Uuid::new_v4()))
    .bind(teacher_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
