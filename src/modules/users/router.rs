use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_user, get_users, update_staff_details, update_student_details};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/{id}", get(get_user))
        .route("/update-staff-details", post(update_staff_details))
        .route("/update-student-details", post(update_student_details))
}
