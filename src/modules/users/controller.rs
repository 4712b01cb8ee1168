use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::User;

/// List all user accounts. Admin-only; the route guard enforces the role.
#[instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state
        .users
        .list_users()
        .await
        .into_iter()
        .map(|record| User {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        })
        .collect();

    Ok(Json(users))
}
