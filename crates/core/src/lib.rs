pub mod error;
pub mod idea;
pub mod pitch;
pub mod types;
