use anyhow::anyhow;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::store::{CredentialStoreRef, NewUserRecord};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthenticatedUser, LoginRequest, LoginResponse, RegisterRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register_user(
        store: &CredentialStoreRef,
        dto: RegisterRequest,
    ) -> Result<User, AppError> {
        if store.find_by_email(&dto.email).await.is_some() {
            return Err(AppError::bad_request(anyhow!("Email already exists")));
        }

        let password_hash = hash_password(&dto.password)?;

        let record = store
            .insert_user(NewUserRecord {
                name: dto.name,
                email: dto.email,
                role: dto.role,
                password_hash,
            })
            .await;

        Ok(User {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
        })
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        store: &CredentialStoreRef,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // Unknown email and wrong password produce the same response.
        let record = store
            .find_by_email(&dto.email)
            .await
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &record.password_hash)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow!("Invalid email or password")));
        }

        // Students carry their student-record id in the token; it is the
        // ownership key the policy engine compares, distinct from the login
        // identity id.
        let student_id = match record.role {
            UserRole::Student => store.student_record_id(record.id).await,
            _ => None,
        };

        let token = create_access_token(
            record.id,
            record.role,
            &record.email,
            student_id,
            jwt_config,
        )?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: AuthenticatedUser {
                id: record.id,
                role: record.role,
                email: record.email,
                student_id,
            },
        })
    }
}
