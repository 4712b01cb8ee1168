use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_instructor, get_my_record};

pub fn init_instructors_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_record))
        .route("/{id}", get(get_instructor))
}
