// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for plugsmith.
//!
//! This module contains pure generation logic with no I/O. Workspace probing
//! and file writes are reached through ports defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable values**: plans and artifacts are built once and read after

pub mod artifact;
pub mod error;
pub mod identifier;
pub mod plan;
pub mod templates;
pub mod workspace;

pub use artifact::{Artifact, ArtifactSet, FileMode, ProjectFile, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use identifier::{Identifier, normalize};
pub use plan::{GenerationPlan, ModelSpec, PlanBuilder, RemoteSource};
pub use templates::{CREATE_SYMBOL, DESTROY_SYMBOL, DependencySource, compose};
pub use workspace::Workspace;
