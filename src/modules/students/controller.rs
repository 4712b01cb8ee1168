use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::StudentProfile;

/// Self-route: the caller's own student record. The route guard has already
/// allowed the request without a path id, so scoping by the caller's
/// ownership key happens here, per the data-layer contract.
#[instrument(skip_all, fields(subject = auth_user.user_id()))]
pub async fn get_my_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<StudentProfile>, AppError> {
    let student_id = match auth_user.student_id() {
        Some(id) => Some(id),
        // Admins reach this route too; resolve their target from the store.
        None => state.users.student_record_id(auth_user.user_id()).await,
    };
    let student_id =
        student_id.ok_or_else(|| AppError::not_found(anyhow!("Student record not found")))?;

    let record = state
        .users
        .find_by_id(auth_user.user_id())
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("Student record not found")))?;

    Ok(Json(StudentProfile {
        student_id,
        user: User {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        },
    }))
}

/// A student record by student-record id. Ownership was already checked by
/// the route guard (admins unconstrained, students only their own id).
#[instrument(skip_all, fields(student_id = id))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudentProfile>, AppError> {
    let record = state
        .users
        .find_by_student_record(id)
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("Student record not found")))?;

    Ok(Json(StudentProfile {
        student_id: id,
        user: User {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        },
    }))
}
