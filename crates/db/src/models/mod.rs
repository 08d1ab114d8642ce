//! Row structs for the `ideas` table.

pub mod idea;
