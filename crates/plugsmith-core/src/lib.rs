//! plugsmith core - plugin project generation for the PluginCore host.
//!
//! This crate holds the domain and application layers, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            plugsmith-cli (CLI)          │
//! │   prompts, flags, config, rendering     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ GenerateService, WorkspaceLocator,      │
//! │ ProjectEmitter                          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             Filesystem                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   plugsmith-adapters (Infrastructure)   │
//! │   LocalFilesystem, MemoryFilesystem     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ Identifier, GenerationPlan, templates   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plugsmith_core::prelude::*;
//!
//! let service = GenerateService::new(Box::new(filesystem));
//! let workspace = service.locate_workspace(".")?;
//! let plan = service.plan(GenerationPlan::builder(workspace).plugin_name("Audio"))?;
//! let report = service.generate(&plan)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerateService, GenerationReport, ProjectEmitter, WorkspaceLocator,
        ports::Filesystem,
    };
    pub use crate::domain::{
        Artifact, ArtifactSet, DomainError, GenerationPlan, Identifier, PlanBuilder,
        RemoteSource, Workspace, compose, normalize,
    };
    pub use crate::error::{ErrorCategory, PlugsmithError, PlugsmithResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
