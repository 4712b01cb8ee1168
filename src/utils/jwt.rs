//! Token codec: issuing and verifying signed access tokens.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret from
//! [`JwtConfig`]. The role is embedded lower-case at issuance so the policy
//! engine can rely on exact equality. Verification is pure computation:
//! signature, structure, and expiry failures all collapse into a single
//! outward `unauthorized` error so a caller cannot tell which check failed.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Creates an access token embedding the principal's identity, role, and
/// (for students) student-record id. Expiry is issue time plus the configured
/// access-token lifetime.
pub fn create_access_token(
    user_id: i64,
    role: UserRole,
    email: &str,
    student_id: Option<i64>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: user_id,
        role,
        email: email.to_string(),
        student_id,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// Rejects tokens whose signature does not match the configured secret and
/// tokens past their expiry. Internal decode faults map to the same error as
/// a bad token, never to a server fault.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
