use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::list_users;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}
