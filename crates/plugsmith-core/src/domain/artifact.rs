use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, identifier::Identifier};

/// A filesystem path guaranteed to be relative.
///
/// Invariant: Never absolute. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<&Identifier> for RelativePath {
    /// Identifiers never contain separators, so they are always a single
    /// relative component.
    fn from(id: &Identifier) -> Self {
        Self(PathBuf::from(id.as_str()))
    }
}

/// Where a generated file sits inside its project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile<'a> {
    /// Fixed name at the project root (`CMakeLists.txt`, `build.sh`).
    Root(&'static str),
    /// `<dir>/<stem>.<ext>`, named after an identifier.
    Named {
        dir: &'static str,
        stem: &'a Identifier,
        ext: &'static str,
    },
}

impl From<(&Identifier, ProjectFile<'_>)> for RelativePath {
    /// Every component is an identifier or a fixed relative name, so the
    /// result is `<project>/...` and never absolute.
    fn from((project, file): (&Identifier, ProjectFile<'_>)) -> Self {
        let mut path = PathBuf::from(project.as_str());
        match file {
            ProjectFile::Root(name) => {
                debug_assert!(Path::new(name).is_relative());
                path.push(name);
            }
            ProjectFile::Named { dir, stem, ext } => {
                debug_assert!(Path::new(dir).is_relative());
                path.push(dir);
                path.push(format!("{stem}.{ext}"));
            }
        }
        Self(path)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Permission bits the emitter applies after writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FileMode {
    #[default]
    Regular,
    Executable,
}

/// One generated output file.
///
/// Artifacts have no identity beyond their path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    path: RelativePath,
    content: String,
    mode: FileMode,
}

impl Artifact {
    pub fn new(path: RelativePath, content: String) -> Self {
        Self {
            path,
            content,
            mode: FileMode::Regular,
        }
    }

    pub fn executable(path: RelativePath, content: String) -> Self {
        Self {
            path,
            content,
            mode: FileMode::Executable,
        }
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn is_executable(&self) -> bool {
        self.mode == FileMode::Executable
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered output of the composer, consumed by the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn with(mut self, artifact: Artifact) -> Self {
        self.push(artifact);
        self
    }

    /// Reject empty sets and paths that appear twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::InvalidPlan("composer produced no artifacts".into()));
        }

        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            if !seen.insert(artifact.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: artifact.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }

    /// Look up an artifact by its relative path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Artifact> {
        let path = path.as_ref();
        self.artifacts.iter().find(|a| a.path.as_path() == path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
