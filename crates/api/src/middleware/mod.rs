//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.

pub mod auth;
