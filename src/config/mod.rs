//! Configuration modules for the Registrar API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and immutable thereafter.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: JWT authentication configuration

pub mod cors;
pub mod jwt;
