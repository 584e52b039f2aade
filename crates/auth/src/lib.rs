//! `maison-auth` — admin credential verification.
//!
//! This crate is intentionally decoupled from storage and rendering: one
//! configured credential pair, one pure check, one session object the CRUD
//! surface requires. Replace with a real credential store before exposing
//! this behind anything network-accessible.

pub mod credentials;

pub use credentials::{AdminCredentials, AdminSession, AuthError};
