//! In-memory credential store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::modules::users::model::UserRole;
use crate::utils::password::hash_password;

use super::{CredentialStore, NewUserRecord, UserRecord};

#[derive(Default)]
struct Inner {
    users: Vec<UserRecord>,
    /// user id -> student-record id
    student_records: HashMap<i64, i64>,
    next_id: i64,
}

/// Thread-safe in-memory store. The lock is held only for the duration of
/// each synchronous map operation, never across an await point.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                student_records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seeds a user with a bcrypt-hashed password and returns its id.
    pub fn seed_user(&self, name: &str, email: &str, password: &str, role: UserRole) -> i64 {
        let password_hash = hash_password(password).expect("bcrypt hash");
        let mut inner = self.inner.write().expect("store lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.users.push(UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            password_hash,
        });
        id
    }

    /// Links a student-record id to a user account.
    pub fn link_student_record(&self, user_id: i64, student_id: i64) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.student_records.insert(user_id, student_id);
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.users.iter().find(|u| u.email == email).cloned()
    }

    async fn find_by_id(&self, id: i64) -> Option<UserRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    async fn student_record_id(&self, user_id: i64) -> Option<i64> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.student_records.get(&user_id).copied()
    }

    async fn find_by_student_record(&self, student_id: i64) -> Option<UserRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        let user_id = inner
            .student_records
            .iter()
            .find(|&(_, sid)| *sid == student_id)
            .map(|(uid, _)| *uid)?;
        inner.users.iter().find(|u| u.id == user_id).cloned()
    }

    async fn list_users(&self) -> Vec<UserRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.users.clone()
    }

    async fn insert_user(&self, new_user: NewUserRecord) -> UserRecord {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        let record = UserRecord {
            id,
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            password_hash: new_user.password_hash,
        };
        inner.users.push(record.clone());
        record
    }
}
