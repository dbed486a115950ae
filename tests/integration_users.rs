mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, setup_test_app};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_users_newest_first(pool: PgPool) {
    let first = create_test_user(&pool, "Student", "testpass123", true).await;
    let second = create_test_user(&pool, "Staff", "testpass123", true).await;
    let app = setup_test_app(pool);

    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);

    let users = body["users"].as_array().unwrap();
    // Newest-created-first
    assert_eq!(users[0]["email"], second.email);
    assert_eq!(users[1]["email"], first.email);
    for user in users {
        assert!(user.get("password").is_none());
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_by_id(pool: PgPool) {
    let user = create_test_user(&pool, "Student", "testpass123", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get(&format!("/api/users/{}", user.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], user.id);
    assert_eq!(body["user"]["register_number"], user.register_number);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_user_not_found(pool: PgPool) {
    let app = setup_test_app(pool);

    let response = app.oneshot(get("/api/users/999999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
}
