mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_class, create_test_user, setup_test_app};
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
async fn test_create_class_success(pool: PgPool) {
    let teacher = create_test_user(&pool, "Staff", "testpass123", true).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/classes",
        &json!({ "name": "10th Grade Physics", "teacher_id": teacher.id }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["class"]["name"], "10th Grade Physics");
    assert_eq!(body["class"]["teacher_id"], teacher.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_class_rejects_non_staff_teacher(pool: PgPool) {
    let student = create_test_user(&pool, "Student", "testpass123", true).await;
    let app = setup_test_app(pool);

    let request = post_json(
        "/api/classes",
        &json!({ "name": "10th Grade Physics", "teacher_id": student.id }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enroll_student_and_duplicate_rejected(pool: PgPool) {
    let teacher = create_test_user(&pool, "Staff", "testpass123", true).await;
    let student = create_test_user(&pool, "Student", "testpass123", true).await;
    let class_id = create_test_class(&pool, teacher.id).await;
    let app = setup_test_app(pool);

    let first = app
        .clone()
        .oneshot(post_json(
            &format!("/api/classes/{class_id}/enroll"),
            &json!({ "student_id": student.id }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let body = body_json(first).await;
    assert_eq!(body["enrollment"]["student_id"], student.id);
    assert_eq!(body["enrollment"]["class_id"], class_id);

    // Pair-uniqueness: second enrollment of the same student fails
    let second = app
        .oneshot(post_json(
            &format!("/api/classes/{class_id}/enroll"),
            &json!({ "student_id": student.id }),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = body_json(second).await;
    assert_eq!(body["message"], "Student is already enrolled in this class");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enroll_rejects_non_student(pool: PgPool) {
    let teacher = create_test_user(&pool, "Staff", "testpass123", true).await;
    let other_staff = create_test_user(&pool, "Staff", "testpass123", true).await;
    let class_id = create_test_class(&pool, teacher.id).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/api/classes/{class_id}/enroll"),
            &json!({ "student_id": other_staff.id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enroll_unknown_class(pool: PgPool) {
    let student = create_test_user(&pool, "Student", "testpass123", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(post_json(
            "/api/classes/999999/enroll",
            &json!({ "student_id": student.id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
