use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_student_grades, record_grade};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_grade))
        .route("/student/{student_id}", get(get_student_grades))
}
