//! Workspace layout.
//!
//! A workspace is any directory holding the three sibling directories below.
//! Plugins are generated under `PluginsSource/`, built shared objects land in
//! `Plugins/`.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directory receiving the built shared objects.
pub const PLUGINS_DIR: &str = "Plugins";

/// Directory holding one sub-directory per plugin or model project.
pub const SOURCES_DIR: &str = "PluginsSource";

/// Directory holding workspace tooling.
pub const TOOLS_DIR: &str = "tools";

/// The structural signature: all three must exist as directories.
pub const REQUIRED_DIRS: [&str; 3] = [PLUGINS_DIR, SOURCES_DIR, TOOLS_DIR];

/// A resolved workspace root.
///
/// Constructed by the workspace locator once the signature has been
/// verified; the domain never touches the filesystem itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(PLUGINS_DIR)
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root.join(SOURCES_DIR)
    }

    pub fn tools_dir(&self) -> PathBuf {
        self.root.join(TOOLS_DIR)
    }

    /// Paths that must be directories for `root` to be a workspace.
    pub fn signature(root: &Path) -> [PathBuf; 3] {
        REQUIRED_DIRS.map(|dir| root.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths_hang_off_root() {
        let ws = Workspace::new("/ws");
        assert_eq!(ws.plugins_dir(), PathBuf::from("/ws/Plugins"));
        assert_eq!(ws.sources_dir(), PathBuf::from("/ws/PluginsSource"));
        assert_eq!(ws.tools_dir(), PathBuf::from("/ws/tools"));
    }

    #[test]
    fn signature_lists_all_required_dirs() {
        let sig = Workspace::signature(Path::new("/ws"));
        assert_eq!(
            sig,
            [
                PathBuf::from("/ws/Plugins"),
                PathBuf::from("/ws/PluginsSource"),
                PathBuf::from("/ws/tools"),
            ]
        );
    }
}
