//! Role-ownership resolver table.
//!
//! One row per role, recording which claim field is authoritative for
//! ownership comparison and whether the role's self-route exemption applies.
//! The policy engine consults this table instead of hard-coding per-role
//! branches, so adding a role is a new row here (the compiler enforces it
//! through the exhaustive `match`), not new branch code in the engine.
//!
//! The table is process-wide static configuration: initialized at compile
//! time, immutable, safe for unsynchronized concurrent reads.

use crate::modules::users::model::UserRole;

/// Which claim field is compared against an id-addressed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipKey {
    /// No ownership constraint on any resource.
    Unconstrained,
    /// Compare against the subject (user) id claim.
    Subject,
    /// Compare against the student-record id claim.
    StudentRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipRule {
    pub key: OwnershipKey,
    /// Whether routes without an id segment (`/me`-style) are allowed with
    /// record scoping delegated to the data layer.
    pub self_route_exempt: bool,
}

static ADMIN_RULE: OwnershipRule = OwnershipRule {
    key: OwnershipKey::Unconstrained,
    self_route_exempt: true,
};

static INSTRUCTOR_RULE: OwnershipRule = OwnershipRule {
    key: OwnershipKey::Subject,
    self_route_exempt: true,
};

static STUDENT_RULE: OwnershipRule = OwnershipRule {
    key: OwnershipKey::StudentRecord,
    self_route_exempt: true,
};

/// The ownership rule for a role. Exhaustive over the closed role set; there
/// is no default row, so an unmapped role is a compile error rather than a
/// runtime fallthrough.
pub fn rule_for(role: UserRole) -> &'static OwnershipRule {
    match role {
        UserRole::Admin => &ADMIN_RULE,
        UserRole::Instructor => &INSTRUCTOR_RULE,
        UserRole::Student => &STUDENT_RULE,
    }
}
