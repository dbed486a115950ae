use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_class, enroll_student, get_classes};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/{id}/enroll", post(enroll_student))
}
