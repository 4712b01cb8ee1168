//! # Registrar API
//!
//! A course-registration backend built with Rust and Axum. User accounts
//! carry one of three roles (admin, instructor, student), and every protected
//! route is gated by a JWT authentication step followed by a role-and-ownership
//! authorization check.
//!
//! ## Access control
//!
//! - **Authentication** ([`middleware::auth`]): validates the `Authorization`
//!   bearer token and decodes it into [`modules::auth::model::Claims`].
//! - **Authorization** ([`policy`]): a pure decision engine that checks the
//!   caller's role against the roles allowed on the route, then applies the
//!   per-role ownership rule (admins are unconstrained, instructors own the
//!   resources keyed by their user id, students own the resource keyed by
//!   their student-record id).
//! - **Route guards** ([`middleware::ownership`]): axum middleware that wires
//!   the two together and translates denials into HTTP responses.
//!
//! The relational store is kept behind the [`store::CredentialStore`] trait;
//! an in-memory implementation backs the tests.

pub mod config;
pub mod middleware;
pub mod modules;
pub mod policy;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
