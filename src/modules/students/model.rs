use serde::Serialize;

use crate::modules::users::model::User;

/// A student record joined with its owning user account.
#[derive(Serialize, Debug, Clone)]
pub struct StudentProfile {
    pub student_id: i64,
    pub user: User,
}
