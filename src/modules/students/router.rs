use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_my_record, get_student};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_record))
        .route("/{id}", get(get_student))
}
