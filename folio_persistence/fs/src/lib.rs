//! Repositories backed by JSON files on the local filesystem.

pub mod post;
pub mod theme;
