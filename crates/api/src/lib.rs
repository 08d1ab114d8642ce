//! hourlypitch web server library.
//!
//! Exposes the building blocks (config, state, error handling, templates,
//! rotation, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod rotation;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
