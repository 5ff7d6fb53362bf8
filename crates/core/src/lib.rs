//! Shared primitives for the portfolio backend.
//!
//! Zero internal dependencies so both the repository layer and the HTTP layer
//! can use them.

pub mod error;
pub mod types;
pub mod validation;
