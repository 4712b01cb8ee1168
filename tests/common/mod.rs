use std::sync::Arc;

use registrar::config::cors::CorsConfig;
use registrar::config::jwt::JwtConfig;
use registrar::modules::users::model::UserRole;
use registrar::router::init_router;
use registrar::state::AppState;
use registrar::store::memory::MemoryStore;
use registrar::utils::jwt::create_access_token;

pub const STUDENT_RECORD_ID: i64 = 42;

#[allow(dead_code)]
pub struct TestContext {
    pub app: axum::Router,
    pub jwt_config: JwtConfig,
    pub admin_id: i64,
    pub instructor_id: i64,
    pub student_id: i64,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

/// Builds the real router over a seeded in-memory store: one admin, one
/// instructor, and one student whose student record has a well-known id.
pub fn setup_app() -> TestContext {
    let store = Arc::new(MemoryStore::new());

    let admin_id = store.seed_user("Alice Admin", "admin@example.com", "Adm1n!pass", UserRole::Admin);
    let instructor_id = store.seed_user(
        "Ivan Instructor",
        "instructor@example.com",
        "Teach3r!pass",
        UserRole::Instructor,
    );
    let student_id = store.seed_user(
        "Sam Student",
        "student@example.com",
        "Stud3nt!pass",
        UserRole::Student,
    );
    store.link_student_record(student_id, STUDENT_RECORD_ID);

    let jwt_config = test_jwt_config();
    let state = AppState {
        jwt_config: jwt_config.clone(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        users: store,
    };

    TestContext {
        app: init_router(state),
        jwt_config,
        admin_id,
        instructor_id,
        student_id,
    }
}

#[allow(dead_code)]
pub fn issue_token(user_id: i64, role: UserRole, email: &str, student_id: Option<i64>) -> String {
    create_access_token(user_id, role, email, student_id, &test_jwt_config()).unwrap()
}
