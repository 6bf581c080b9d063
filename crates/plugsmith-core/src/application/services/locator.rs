//! Workspace locator - bounded upward search for the workspace signature.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::Workspace,
    error::PlugsmithResult,
};

/// Directories examined at most: the start directory and its ancestors.
pub const MAX_SEARCH_DEPTH: usize = 6;

/// Finds the workspace root from any directory inside it.
pub struct WorkspaceLocator<'a> {
    filesystem: &'a dyn Filesystem,
    max_depth: usize,
}

impl<'a> WorkspaceLocator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self {
            filesystem,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    /// Override the search bound (mostly for tests).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk upward from `start` until a directory holds all required
    /// sub-directories, the bound is exhausted, or the root is reached.
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn locate(&self, start: &Path) -> PlugsmithResult<Workspace> {
        let start = self.resolve_start(start)?;
        let mut current = start.as_path();

        for depth in 0..self.max_depth {
            if self.is_workspace(current) {
                debug!(depth, root = %current.display(), "Workspace found");
                return Ok(Workspace::new(current));
            }
            debug!(depth, dir = %current.display(), "Not a workspace");

            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => break,
            }
        }

        Err(ApplicationError::WorkspaceNotFound {
            start,
            max_depth: self.max_depth,
        }
        .into())
    }

    /// Canonicalize `start`, tolerating trailing components that do not exist
    /// yet: the nearest existing ancestor is resolved and the rest re-appended.
    fn resolve_start(&self, start: &Path) -> PlugsmithResult<PathBuf> {
        let mut missing: Vec<OsString> = Vec::new();
        let mut current = start;

        loop {
            match self.filesystem.canonicalize(current) {
                Ok(resolved) => {
                    return Ok(missing.iter().rev().fold(resolved, |path, c| path.join(c)));
                }
                Err(err) => match (current.parent(), current.file_name()) {
                    (Some(parent), Some(name)) => {
                        debug!(missing = %current.display(), "Start component does not exist");
                        missing.push(name.to_os_string());
                        current = if parent.as_os_str().is_empty() {
                            Path::new(".")
                        } else {
                            parent
                        };
                    }
                    _ => return Err(err),
                },
            }
        }
    }

    fn is_workspace(&self, dir: &Path) -> bool {
        Workspace::signature(dir)
            .iter()
            .all(|required| self.filesystem.is_dir(required))
    }
}
