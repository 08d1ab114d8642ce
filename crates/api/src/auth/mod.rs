//! Authentication primitives.
//!
//! - [`basic`] -- HTTP Basic header parsing and admin credential checks.

pub mod basic;
