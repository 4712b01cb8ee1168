//! Feature modules, one directory per resource.
//!
//! Each module follows the same shape: `model` (entities and DTOs),
//! `router` (route table), `controller` (axum handlers), and, where the
//! module owns real logic, `service`.

pub mod auth;
pub mod instructors;
pub mod students;
pub mod users;
