//! Request handlers, grouped by audience.

pub mod admin;
pub mod public;
