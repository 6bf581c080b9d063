//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::error::PlugsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `plugsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `plugsmith_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PlugsmithResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> PlugsmithResult<()>;

    /// Set or clear the executable bits.
    fn set_permissions(&self, path: &Path, executable: bool) -> PlugsmithResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Resolve `path` to an absolute path without `.`/`..` components.
    fn canonicalize(&self, path: &Path) -> PlugsmithResult<PathBuf>;
}
