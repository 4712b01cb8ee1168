//! Authorization policy engine.
//!
//! A pure decision function evaluated once per request: given the decoded
//! [`Claims`], the roles allowed on the route, and the resource id parsed
//! from the path, it returns [`Decision::Allow`] or [`Decision::Deny`].
//! No I/O, no shared mutable state, idempotent per call.
//!
//! Evaluation order matters and is part of the contract:
//!
//! 1. Role-set membership. A caller whose role is not allowed on the route
//!    is denied with [`DenyReason::RoleMismatch`] before any ownership logic
//!    runs. Admins get no implicit bypass here: an admin hitting an
//!    instructor-only route is denied like anyone else.
//! 2. The per-role ownership rule from the [`resolver`] table:
//!    - admin: unconstrained, always allowed;
//!    - student: an id-addressed resource must equal the `student_id` claim
//!      (never `sub`; login identity and student record are distinct);
//!    - instructor: an id-addressed resource must equal `sub`.
//!    A route without an id segment is a self-route and is allowed, with
//!    record scoping delegated to the data layer. An id segment that is
//!    present but not numeric is an explicit [`DenyReason::InvalidResourceId`]
//!    denial, never silently treated as a self-route.

pub mod resolver;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;

use resolver::{OwnershipKey, OwnershipRule, rule_for};

/// The resource identifier carried by the request path, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceParam {
    /// No `id` segment in the path: a self-route (`/me`) or collection route.
    Absent,
    /// Numeric `id` segment.
    Id(i64),
    /// An `id` segment was present but did not parse as an integer.
    Invalid,
}

/// One authorization question: which roles may pass, and which resource (if
/// any) is being addressed.
#[derive(Debug, Clone)]
pub struct AccessRequest<'a> {
    pub required_roles: &'a [UserRole],
    pub resource: ResourceParam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Caller's role is not in the route's allowed set.
    RoleMismatch,
    /// Caller's ownership key does not match the addressed resource.
    NotOwner,
    /// The path carried a resource id that was not a valid integer.
    InvalidResourceId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Decides whether the authenticated caller may proceed.
pub fn authorize(claims: &Claims, request: &AccessRequest<'_>) -> Decision {
    if !request.required_roles.contains(&claims.role) {
        return Decision::Deny(DenyReason::RoleMismatch);
    }

    let rule = rule_for(claims.role);
    match rule.key {
        OwnershipKey::Unconstrained => Decision::Allow,
        OwnershipKey::Subject => check_ownership(Some(claims.sub), request.resource, rule),
        OwnershipKey::StudentRecord => check_ownership(claims.student_id, request.resource, rule),
    }
}

fn check_ownership(
    owner_id: Option<i64>,
    resource: ResourceParam,
    rule: &OwnershipRule,
) -> Decision {
    match resource {
        ResourceParam::Absent if rule.self_route_exempt => Decision::Allow,
        // A role without the self-route exemption cannot establish ownership
        // of an unaddressed resource.
        ResourceParam::Absent => Decision::Deny(DenyReason::NotOwner),
        ResourceParam::Invalid => Decision::Deny(DenyReason::InvalidResourceId),
        ResourceParam::Id(requested) => match owner_id {
            Some(owner) if owner == requested => Decision::Allow,
            _ => Decision::Deny(DenyReason::NotOwner),
        },
    }
}
