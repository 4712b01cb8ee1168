use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Self-route: the caller's own instructor account. Instructors have no
/// separate record id; their resource id is the user id itself.
#[instrument(skip_all, fields(subject = auth_user.user_id()))]
pub async fn get_my_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let record = state
        .users
        .find_by_id(auth_user.user_id())
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("Instructor not found")))?;

    Ok(Json(User {
        id: record.id,
        name: record.name,
        email: record.email,
        role: record.role,
    }))
}

/// An instructor account by user id. Ownership was already checked by the
/// route guard against the caller's subject id.
#[instrument(skip_all, fields(instructor_id = id))]
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let record = state
        .users
        .find_by_id(id)
        .await
        .filter(|record| record.role == UserRole::Instructor)
        .ok_or_else(|| AppError::not_found(anyhow!("Instructor not found")))?;

    Ok(Json(User {
        id: record.id,
        name: record.name,
        email: record.email,
        role: record.role,
    }))
}
