//! Authentication primitives.
//!
//! - [`jwt`] -- validation of externally issued HS256 bearer tokens.

pub mod jwt;
