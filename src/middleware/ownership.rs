//! Role-and-ownership route guards.
//!
//! Thin axum wrappers around the pure [`crate::policy`] engine, applied with
//! `middleware::from_fn_with_state`. Each guard extracts the authenticated
//! caller, reads the `id` path parameter (if the matched route has one),
//! asks the engine for a decision, and maps denials to HTTP responses.
//!
//! Denial responses are deliberately uniform: role mismatches and ownership
//! failures share one 403 body so a caller cannot probe which check failed.
//! The specific reason is logged server-side only.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, RawPathParams, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::policy::{AccessRequest, Decision, DenyReason, ResourceParam, authorize};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the caller holds one of `allowed_roles` and, for non-admin
/// roles, owns the resource addressed by the path's `id` parameter.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/students/{id}", get(get_student))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         |state, req, next| {
///             verify_role_and_ownership(state, req, next, vec![UserRole::Admin, UserRole::Student])
///         },
///     ));
/// ```
pub async fn verify_role_and_ownership(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let resource = resource_param(&mut parts).await;

    let access_request = AccessRequest {
        required_roles: &allowed_roles,
        resource,
    };

    match authorize(&auth_user.0, &access_request) {
        Decision::Allow => {
            let req = Request::from_parts(parts, body);
            Ok(next.run(req).await)
        }
        Decision::Deny(reason) => Err(deny_error(reason, &auth_user)),
    }
}

/// Guard for admin-only routes.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match verify_role_and_ownership(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Guard for student resources: admins pass unconditionally, students pass
/// only for their own record.
pub async fn require_admin_or_student(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match verify_role_and_ownership(
        State(state),
        req,
        next,
        vec![UserRole::Admin, UserRole::Student],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Guard for instructor resources: admins pass unconditionally, instructors
/// pass only for their own record.
pub async fn require_admin_or_instructor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match verify_role_and_ownership(
        State(state),
        req,
        next,
        vec![UserRole::Admin, UserRole::Instructor],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Reads the matched route's `id` path parameter. No `id` key means a
/// self-route or collection route; a present-but-non-numeric value is kept
/// distinct so the engine can reject it explicitly.
async fn resource_param(parts: &mut Parts) -> ResourceParam {
    let params = match RawPathParams::from_request_parts(parts, &()).await {
        Ok(params) => params,
        Err(_) => return ResourceParam::Absent,
    };

    let raw = params
        .iter()
        .find(|(key, _)| *key == "id")
        .map(|(_, value)| value);
    parse_resource_param(raw)
}

/// Maps the raw `id` segment to its policy form: no segment is a self-route
/// or collection route, a numeric segment addresses a resource, anything
/// else is kept distinct for an explicit denial.
fn parse_resource_param(raw: Option<&str>) -> ResourceParam {
    match raw {
        None => ResourceParam::Absent,
        Some(value) => value
            .parse::<i64>()
            .map_or(ResourceParam::Invalid, ResourceParam::Id),
    }
}

fn deny_error(reason: DenyReason, auth_user: &AuthUser) -> AppError {
    match reason {
        DenyReason::RoleMismatch | DenyReason::NotOwner => {
            warn!(
                subject = auth_user.user_id(),
                role = %auth_user.role(),
                ?reason,
                "authorization denied"
            );
            AppError::forbidden(anyhow!("Access denied"))
        }
        DenyReason::InvalidResourceId => {
            AppError::bad_request(anyhow!("Invalid resource identifier"))
        }
    }
}
