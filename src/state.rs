use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::store::CredentialStoreRef;
use crate::store::memory::MemoryStore;

/// Process-wide application state, built once at startup and cloned
/// immutably into every request. The signing secret and the credential store
/// handle live here; nothing in it is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub users: CredentialStoreRef,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        users: Arc::new(MemoryStore::new()),
    }
}
