//! Request extractors that gate access to handlers.
//!
//! - [`basic_auth::RequireAdmin`] -- Requires the admin Basic credentials.

pub mod basic_auth;
