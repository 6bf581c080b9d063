//! Project emitter - materializes composed artifacts.
//!
//! Writes are sequential and last-write-wins. There is no rollback: a
//! failure mid-way leaves the files written so far in place.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::ArtifactSet, error::PlugsmithResult};

pub struct ProjectEmitter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ProjectEmitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write every artifact under `root` in the order supplied.
    ///
    /// Returns the absolute paths written.
    #[instrument(skip_all, fields(root = %root.display(), artifacts = artifacts.len()))]
    pub fn emit(&self, root: &Path, artifacts: &ArtifactSet) -> PlugsmithResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            let path = root.join(artifact.path());

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, artifact.content())?;

            if artifact.is_executable() {
                self.filesystem.set_permissions(&path, true)?;
            }

            debug!(path = %path.display(), bytes = artifact.size(), "Wrote artifact");
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::{Artifact, RelativePath};
    use crate::error::PlugsmithError;

    fn rel(p: &str) -> RelativePath {
        RelativePath::try_new(p).unwrap()
    }

    #[test]
    fn creates_parent_then_writes_then_marks_executable() {
        let set = ArtifactSet::new()
            .with(Artifact::new(rel("P/CMakeLists.txt"), "cmake".into()))
            .with(Artifact::executable(rel("P/build.sh"), "sh".into()));

        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();

        fs.expect_create_dir_all()
            .with(eq(Path::new("/root/P")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(Path::new("/root/P/CMakeLists.txt")), eq("cmake"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_create_dir_all()
            .with(eq(Path::new("/root/P")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(Path::new("/root/P/build.sh")), eq("sh"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .with(eq(Path::new("/root/P/build.sh")), eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let written = ProjectEmitter::new(&fs)
            .emit(Path::new("/root"), &set)
            .unwrap();
        assert_eq!(
            written,
            vec![
                PathBuf::from("/root/P/CMakeLists.txt"),
                PathBuf::from("/root/P/build.sh"),
            ]
        );
    }

    #[test]
    fn regular_files_never_touch_permissions() {
        let set = ArtifactSet::new().with(Artifact::new(rel("a/b.txt"), "x".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions().never();

        ProjectEmitter::new(&fs)
            .emit(Path::new("/root"), &set)
            .unwrap();
    }

    #[test]
    fn write_failure_stops_emission() {
        let set = ArtifactSet::new()
            .with(Artifact::new(rel("a.txt"), "1".into()))
            .with(Artifact::new(rel("b.txt"), "2".into()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(Path::new("/root/a.txt")), eq("1"))
            .times(1)
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });
        fs.expect_write_file()
            .with(eq(Path::new("/root/b.txt")), eq("2"))
            .never();

        let err = ProjectEmitter::new(&fs)
            .emit(Path::new("/root"), &set)
            .unwrap_err();
        assert!(matches!(
            err,
            PlugsmithError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
