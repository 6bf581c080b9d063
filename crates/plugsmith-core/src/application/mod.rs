//! Application layer for plugsmith.
//!
//! This layer contains:
//! - **Services**: use case orchestration (locate, plan, compose, emit)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Generation rules live in `crate::domain`; this layer only sequences them
//! and performs I/O through ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationReport, ProjectEmitter, WorkspaceLocator};

pub use ports::Filesystem;

pub use error::ApplicationError;
