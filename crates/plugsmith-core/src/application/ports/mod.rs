//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   `plugsmith-adapters`
//!   - `Filesystem`: directory checks and file writes

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
