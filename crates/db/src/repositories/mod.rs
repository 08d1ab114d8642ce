//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument.

pub mod idea_repo;

pub use idea_repo::IdeaRepo;
