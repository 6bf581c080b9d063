//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "find the workspace" or "generate a plugin".

pub mod emitter;
pub mod generate_service;
pub mod locator;

pub use emitter::ProjectEmitter;
pub use generate_service::{GenerateService, GenerationReport};
pub use locator::{MAX_SEARCH_DEPTH, WorkspaceLocator};
