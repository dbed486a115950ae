use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_announcement, get_announcements};
use crate::state::AppState;

pub fn init_announcements_router() -> Router<AppState> {
    Router::new().route("/", get(get_announcements).post(create_announcement))
}
