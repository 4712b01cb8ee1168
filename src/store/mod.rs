//! Credential store seam.
//!
//! The relational store is an external collaborator; the application talks to
//! it through this narrow trait. `Send + Sync + async_trait` make the trait
//! object (`Arc<dyn CredentialStore>`) shareable across axum's task
//! boundaries. [`memory::MemoryStore`] is the in-tree implementation used by
//! tests and the demo binary.
//!
//! Contract note: when a self-route is allowed without a path-level resource
//! id, the store implementation must scope the query by the caller's
//! ownership key (student-record id for students, user id for instructors).
//! The policy engine cannot enforce that after the fact.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::users::model::UserRole;

/// A principal record as stored, including the password hash. Never
/// serialized outward; convert to [`crate::modules::users::model::User`]
/// first.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Principal lookup by login key.
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    /// Principal lookup by user id.
    async fn find_by_id(&self, id: i64) -> Option<UserRecord>;

    /// The student-record id linked to a user account, if any. Students have
    /// exactly one; other roles have none.
    async fn student_record_id(&self, user_id: i64) -> Option<i64>;

    /// Reverse lookup: the user account owning a student record.
    async fn find_by_student_record(&self, student_id: i64) -> Option<UserRecord>;

    /// All user accounts (admin listing).
    async fn list_users(&self) -> Vec<UserRecord>;

    /// Inserts a new user account and returns it with its assigned id.
    /// Callers check for duplicate emails first.
    async fn insert_user(&self, new_user: NewUserRecord) -> UserRecord;
}

pub type CredentialStoreRef = Arc<dyn CredentialStore>;
