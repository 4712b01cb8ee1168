//! Authentication models: token claims and login/register DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::users::model::{User, UserRole};
use crate::utils::validation::validate_password_strength;

/// JWT claims for access tokens.
///
/// Decoded once per request by the authentication gate and consumed read-only
/// by the policy engine and handlers. The fields are everything the engine
/// needs, so no database lookup happens on the authorization path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id of the authenticated principal (subject claim)
    pub sub: i64,
    /// Principal's role, lower-case on the wire
    pub role: UserRole,
    /// Principal's email address (informational, not used in access decisions)
    pub email: String,
    /// Student-record id. Present only for students; distinct from `sub`
    /// because a student's login identity and student record are separate
    /// entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Deserialize, Clone, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = validate_password_strength))]
    pub password: String,
    pub role: UserRole,
}

/// The principal block returned alongside the token on login.
#[derive(Serialize, Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub role: UserRole,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: AuthenticatedUser,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_student() {
        let claims = Claims {
            sub: 7,
            role: UserRole::Student,
            email: "student@example.com".to_string(),
            student_id: Some(42),
            exp: 1234567890,
            iat: 1234564290,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":7"#));
        assert!(serialized.contains(r#""role":"student""#));
        assert!(serialized.contains(r#""student_id":42"#));
    }

    #[test]
    fn test_claims_omit_absent_student_id() {
        let claims = Claims {
            sub: 5,
            role: UserRole::Instructor,
            email: "instructor@example.com".to_string(),
            student_id: None,
            exp: 1234567890,
            iat: 1234564290,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(!serialized.contains("student_id"));
    }

    #[test]
    fn test_claims_deserialize_without_student_id() {
        let json = r#"{"sub":3,"role":"admin","email":"admin@example.com","exp":9999999999,"iat":1234567890}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, 3);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.student_id, None);
    }

    #[test]
    fn test_claims_reject_unknown_role() {
        let json = r#"{"sub":3,"role":"owner","email":"a@b.com","exp":9999999999,"iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
