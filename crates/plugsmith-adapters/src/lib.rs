//! Infrastructure adapters for plugsmith.
//!
//! This crate implements the ports defined in `plugsmith-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
