use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_class_attendance, mark_attendance};
use crate::state::AppState;

pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(mark_attendance))
        .route("/class/{class_id}", get(get_class_attendance))
}
