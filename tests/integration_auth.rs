mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, generate_unique_register_number, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool);

    let email = generate_unique_email();
    let request = post_json(
        "/api/users/register",
        &json!({
            "first_name": "Asha",
            "last_name": "Nair",
            "email": email,
            "register_number": generate_unique_register_number(),
            "phone": "9876543210",
            "role": "Student",
            "password": "secret12345"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "Student");
    assert_eq!(body["user"]["profile_completed"], false);
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = setup_test_app(pool);

    let email = generate_unique_email();
    let payload = |register_number: String| {
        json!({
            "first_name": "Asha",
            "last_name": "Nair",
            "email": email,
            "register_number": register_number,
            "phone": "9876543210",
            "role": "Student",
            "password": "secret12345"
        })
    };

    let first = app
        .clone()
        .oneshot(post_json(
            "/api/users/register",
            &payload(generate_unique_register_number()),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same email, different register number
    let second = app
        .oneshot(post_json(
            "/api/users/register",
            &payload(generate_unique_register_number()),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = body_json(second).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_register_number(pool: PgPool) {
    let app = setup_test_app(pool);

    let register_number = generate_unique_register_number();
    let payload = |email: String| {
        json!({
            "first_name": "Asha",
            "last_name": "Nair",
            "email": email,
            "register_number": register_number,
            "phone": "9876543210",
            "role": "Student",
            "password": "secret12345"
        })
    };

    let first = app
        .clone()
        .oneshot(post_json("/api/users/register", &payload(generate_unique_email())))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_json("/api/users/register", &payload(generate_unique_email())))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = body_json(second).await;
    assert_eq!(body["message"], "Register number already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_bad_phone(pool: PgPool) {
    let app = setup_test_app(pool);

    for phone in ["12345", "98765432101", "98765x3210"] {
        let request = post_json(
            "/api/users/register",
            &json!({
                "first_name": "Asha",
                "last_name": "Nair",
                "email": generate_unique_email(),
                "register_number": generate_unique_register_number(),
                "phone": phone,
                "role": "Student",
                "password": "secret12345"
            }),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "phone {phone}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_rejects_unknown_role(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/users/register",
        &json!({
            "first_name": "Asha",
            "last_name": "Nair",
            "email": generate_unique_email(),
            "register_number": generate_unique_register_number(),
            "phone": "9876543210",
            "role": "Teacher",
            "password": "secret12345"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success_has_no_password_field(pool: PgPool) {
    let user = create_test_user(&pool, "Student", "testpass123", true).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/users/login",
        &json!({
            "email": user.email,
            "password": "testpass123",
            "role": "Student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], user.email);
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let user = create_test_user(&pool, "Student", "testpass123", true).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/users/login",
        &json!({
            "email": user.email,
            "password": "wrongpass123",
            "role": "Student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_role_indistinguishable_from_unknown_email(pool: PgPool) {
    // Account exists as Staff; login asks for Student.
    let user = create_test_user(&pool, "Staff", "testpass123", true).await;
    let app = setup_test_app(pool);

    let wrong_role = app
        .clone()
        .oneshot(post_json(
            "/api/users/login",
            &json!({
                "email": user.email,
                "password": "testpass123",
                "role": "Student"
            }),
        ))
        .await
        .unwrap();

    let unknown_email = app
        .oneshot(post_json(
            "/api/users/login",
            &json!({
                "email": "nobody@test.com",
                "password": "testpass123",
                "role": "Student"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_role.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_role_body = body_json(wrong_role).await;
    let unknown_email_body = body_json(unknown_email).await;
    assert_eq!(wrong_role_body, unknown_email_body);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_disabled_account_reported_distinctly(pool: PgPool) {
    let user = create_test_user(&pool, "Student", "testpass123", false).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/users/login",
        &json!({
            "email": user.email,
            "password": "testpass123",
            "role": "Student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User account is disabled");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_disabled_account_with_wrong_password_stays_generic(pool: PgPool) {
    // Disabled is only reported after the password verified.
    let user = create_test_user(&pool, "Student", "testpass123", false).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/users/login",
        &json!({
            "email": user.email,
            "password": "wrongpass123",
            "role": "Student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_registered_password_is_stored_hashed(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    let request = post_json(
        "/api/users/register",
        &json!({
            "first_name": "Asha",
            "last_name": "Nair",
            "email": email,
            "register_number": generate_unique_register_number(),
            "phone": "9876543210",
            "role": "Student",
            "password": "secret12345"
        }),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_ne!(stored, "secret12345");
    assert!(campusmedia::utils::password::is_bcrypt_hash(&stored));
}
