//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Locate the workspace from a starting directory
//! 2. Resolve raw input into a [`GenerationPlan`]
//! 3. Compose artifacts from the plan
//! 4. Emit them under `<workspace>/PluginsSource`

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{ProjectEmitter, WorkspaceLocator},
    },
    domain::{ArtifactSet, GenerationPlan, PlanBuilder, Workspace, compose},
    error::{PlugsmithError, PlugsmithResult},
};

/// Outcome of a successful generation, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub plugin_root: PathBuf,
    pub model_root: Option<PathBuf>,
    /// Where the built shared object will be placed.
    pub plugins_output: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Find the workspace containing `start`.
    pub fn locate_workspace(&self, start: impl AsRef<Path>) -> PlugsmithResult<Workspace> {
        WorkspaceLocator::new(self.filesystem.as_ref()).locate(start.as_ref())
    }

    /// Finish a plan from collected input.
    pub fn plan(&self, builder: PlanBuilder) -> PlugsmithResult<GenerationPlan> {
        builder.build().map_err(PlugsmithError::Domain)
    }

    /// Compose and validate the artifact set without writing anything.
    pub fn preview(&self, plan: &GenerationPlan) -> PlugsmithResult<ArtifactSet> {
        let artifacts = compose(plan);
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Project directories of `plan` that already exist and will be
    /// overwritten.
    pub fn existing_roots(&self, plan: &GenerationPlan) -> Vec<PathBuf> {
        std::iter::once(plan.plugin_root())
            .chain(plan.model_root())
            .filter(|root| self.filesystem.exists(root))
            .collect()
    }

    /// Compose and emit every artifact of `plan`.
    #[instrument(
        skip_all,
        fields(
            plugin = %plan.plugin_name(),
            with_model = plan.with_model(),
            workspace = %plan.workspace().root().display()
        )
    )]
    pub fn generate(&self, plan: &GenerationPlan) -> PlugsmithResult<GenerationReport> {
        let artifacts = self.preview(plan)?;
        info!(artifacts = artifacts.len(), "Artifacts composed");

        let root = plan.workspace().sources_dir();
        let written = ProjectEmitter::new(self.filesystem.as_ref()).emit(&root, &artifacts)?;

        info!(files = written.len(), "Generation completed");
        Ok(GenerationReport {
            plugin_root: plan.plugin_root(),
            model_root: plan.model_root(),
            plugins_output: plan.workspace().plugins_dir(),
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::DomainError;

    #[test]
    fn plan_errors_surface_as_domain_errors() {
        let service = GenerateService::new(Box::new(MockFilesystem::new()));
        let err = service
            .plan(GenerationPlan::builder(Workspace::new("/ws")).plugin_name("..."))
            .map(|p| p.plugin_name().to_string());
        assert_eq!(err.unwrap(), "___");

        let err = service
            .plan(GenerationPlan::builder(Workspace::new("/ws")).plugin_class(""))
            .unwrap_err();
        assert!(matches!(
            err,
            PlugsmithError::Domain(DomainError::EmptyIdentifier { .. })
        ));
    }

    #[test]
    fn workspace_not_found_is_reported_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_canonicalize().returning(|p| Ok(p.to_path_buf()));
        fs.expect_is_dir().returning(|_| false);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let service = GenerateService::new(Box::new(fs));
        let err = service.locate_workspace("/nowhere").unwrap_err();
        assert!(matches!(
            err,
            PlugsmithError::Application(ApplicationError::WorkspaceNotFound { .. })
        ));
    }

    #[test]
    fn generate_writes_under_plugins_source() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.starts_with("/ws/PluginsSource"))
            .times(7)
            .returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|path, exec| *exec && path.ends_with("MyPlugin/build.sh"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        let plan = service
            .plan(
                GenerationPlan::builder(Workspace::new("/ws"))
                    .plugin_name("MyPlugin")
                    .with_model(true),
            )
            .unwrap();

        let report = service.generate(&plan).unwrap();
        assert_eq!(report.written.len(), 7);
        assert_eq!(report.plugin_root, PathBuf::from("/ws/PluginsSource/MyPlugin"));
        assert_eq!(
            report.model_root,
            Some(PathBuf::from("/ws/PluginsSource/MyPluginModel"))
        );
        assert_eq!(report.plugins_output, PathBuf::from("/ws/Plugins"));
    }

    #[test]
    fn existing_roots_lists_only_present_projects() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/ws/PluginsSource/MyPluginModel"));

        let service = GenerateService::new(Box::new(fs));
        let plan = service
            .plan(
                GenerationPlan::builder(Workspace::new("/ws"))
                    .plugin_name("MyPlugin")
                    .with_model(true),
            )
            .unwrap();

        assert_eq!(
            service.existing_roots(&plan),
            vec![PathBuf::from("/ws/PluginsSource/MyPluginModel")]
        );
    }
}
