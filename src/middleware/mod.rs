//! Middleware for authentication and authorization.
//!
//! - [`auth`]: the authentication gate. The [`auth::AuthUser`] extractor
//!   validates the bearer token and decodes it into claims; requests with a
//!   missing or invalid credential terminate here.
//! - [`ownership`]: route guards that run the role-and-ownership policy
//!   engine against the decoded claims and the path's resource id.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies the token and extracts claims (401 on failure)
//! 3. The route guard consults the policy engine (403/400 on denial)
//! 4. The handler runs with the populated claims

pub mod auth;
pub mod ownership;
