//! Generation plan: every resolved choice for one invocation.
//!
//! A [`GenerationPlan`] is built once from raw user input through
//! [`PlanBuilder`] and is immutable afterwards. Templates only read from it.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    artifact::RelativePath, error::DomainError, identifier::Identifier, workspace::Workspace,
};

/// Plugin name used when the caller gives none.
pub const DEFAULT_PLUGIN_NAME: &str = "MyPlugin";

/// Default repository host for the remote model fetch.
pub const DEFAULT_REMOTE_BASE: &str = "https://github.com/d3156";

/// Default branch for the remote model fetch.
pub const DEFAULT_REMOTE_TAG: &str = "master";

/// Default plugin class for a plugin name: `<Name>Plugin`.
pub fn default_plugin_class(plugin_name: &Identifier) -> Identifier {
    plugin_name.suffixed("Plugin")
}

/// Default model project name for a plugin name: `<Name>Model`.
pub fn default_model_name(plugin_name: &Identifier) -> Identifier {
    plugin_name.suffixed("Model")
}

/// Where a missing model project is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteSource {
    base_url: String,
    tag: String,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            tag: tag.into(),
        }
    }

    /// `<base>/<model>.git`
    pub fn repository_url(&self, model: &Identifier) -> String {
        format!("{}/{model}.git", self.base_url.trim_end_matches('/'))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE_BASE, DEFAULT_REMOTE_TAG)
    }
}

/// The companion static library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    /// Build target and directory name.
    pub name: Identifier,
    /// Generated C++ type and header stem.
    pub class: Identifier,
}

/// Immutable record of all resolved generation choices.
///
/// Invariant: a model name and class exist iff a model is generated; this is
/// encoded by `model: Option<ModelSpec>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    workspace: Workspace,
    plugin_name: Identifier,
    plugin_class: Identifier,
    model: Option<ModelSpec>,
    remote: RemoteSource,
}

impl GenerationPlan {
    /// Start building a plan anchored at an already resolved workspace.
    pub fn builder(workspace: Workspace) -> PlanBuilder {
        PlanBuilder::new(workspace)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn plugin_name(&self) -> &Identifier {
        &self.plugin_name
    }

    pub fn plugin_class(&self) -> &Identifier {
        &self.plugin_class
    }

    pub fn with_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&ModelSpec> {
        self.model.as_ref()
    }

    pub fn model_name(&self) -> Option<&Identifier> {
        self.model.as_ref().map(|m| &m.name)
    }

    pub fn model_class(&self) -> Option<&Identifier> {
        self.model.as_ref().map(|m| &m.class)
    }

    pub fn remote(&self) -> &RemoteSource {
        &self.remote
    }

    /// Plugin project directory, relative to `PluginsSource/`.
    pub fn plugin_dir(&self) -> RelativePath {
        RelativePath::from(&self.plugin_name)
    }

    /// Model project directory, relative to `PluginsSource/`.
    pub fn model_dir(&self) -> Option<RelativePath> {
        self.model.as_ref().map(|m| RelativePath::from(&m.name))
    }

    pub fn plugin_root(&self) -> PathBuf {
        self.workspace.sources_dir().join(self.plugin_name.as_str())
    }

    pub fn model_root(&self) -> Option<PathBuf> {
        self.model
            .as_ref()
            .map(|m| self.workspace.sources_dir().join(m.name.as_str()))
    }
}

/// Collects raw user input and turns it into a [`GenerationPlan`].
///
/// `None` means "use the default"; an explicit value that normalizes to an
/// empty string is an error.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    workspace: Workspace,
    plugin_name: Option<String>,
    plugin_class: Option<String>,
    with_model: bool,
    model_name: Option<String>,
    model_class: Option<String>,
    remote: RemoteSource,
}

impl PlanBuilder {
    fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            plugin_name: None,
            plugin_class: None,
            with_model: false,
            model_name: None,
            model_class: None,
            remote: RemoteSource::default(),
        }
    }

    pub fn plugin_name(mut self, raw: impl Into<String>) -> Self {
        self.plugin_name = Some(raw.into());
        self
    }

    pub fn plugin_class(mut self, raw: impl Into<String>) -> Self {
        self.plugin_class = Some(raw.into());
        self
    }

    pub fn with_model(mut self, enabled: bool) -> Self {
        self.with_model = enabled;
        self
    }

    /// Also enables the model.
    pub fn model_name(mut self, raw: impl Into<String>) -> Self {
        self.with_model = true;
        self.model_name = Some(raw.into());
        self
    }

    /// Also enables the model.
    pub fn model_class(mut self, raw: impl Into<String>) -> Self {
        self.with_model = true;
        self.model_class = Some(raw.into());
        self
    }

    pub fn remote(mut self, remote: RemoteSource) -> Self {
        self.remote = remote;
        self
    }

    pub fn build(self) -> Result<GenerationPlan, DomainError> {
        let plugin_name = Identifier::new(
            self.plugin_name.as_deref().unwrap_or(DEFAULT_PLUGIN_NAME),
            "plugin name",
        )?;

        let plugin_class = match self.plugin_class.as_deref() {
            Some(raw) => Identifier::new(raw, "plugin class")?,
            None => default_plugin_class(&plugin_name),
        };

        let model = if self.with_model {
            let name = match self.model_name.as_deref() {
                Some(raw) => Identifier::new(raw, "model name")?,
                None => default_model_name(&plugin_name),
            };
            let class = match self.model_class.as_deref() {
                Some(raw) => Identifier::new(raw, "model class")?,
                None => name.clone(),
            };
            if name == plugin_name {
                return Err(DomainError::NameCollision {
                    name: name.into_string(),
                });
            }
            Some(ModelSpec { name, class })
        } else {
            None
        };

        Ok(GenerationPlan {
            workspace: self.workspace,
            plugin_name,
            plugin_class,
            model,
            remote: self.remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn ws() -> Workspace {
        Workspace::new("/ws")
    }

    #[test]
    fn defaults_follow_plugin_name() {
        let plan = GenerationPlan::builder(ws())
            .plugin_name("Audio")
            .with_model(true)
            .build()
            .unwrap();

        assert_eq!(plan.plugin_class().as_str(), "AudioPlugin");
        assert_eq!(plan.model_name().unwrap().as_str(), "AudioModel");
        assert_eq!(plan.model_class().unwrap().as_str(), "AudioModel");
    }

    #[test]
    fn missing_plugin_name_uses_default() {
        let plan = GenerationPlan::builder(ws()).build().unwrap();
        assert_eq!(plan.plugin_name().as_str(), DEFAULT_PLUGIN_NAME);
        assert_eq!(plan.plugin_class().as_str(), "MyPluginPlugin");
        assert!(!plan.with_model());
    }

    #[test]
    fn without_model_has_no_model_fields() {
        let plan = GenerationPlan::builder(ws())
            .plugin_name("X")
            .with_model(false)
            .build()
            .unwrap();
        assert!(plan.model().is_none());
        assert!(plan.model_name().is_none());
        assert!(plan.model_class().is_none());
        assert!(plan.model_dir().is_none());
        assert!(plan.model_root().is_none());
    }

    #[test]
    fn raw_input_is_normalized() {
        let plan = GenerationPlan::builder(ws())
            .plugin_name("3-bad name!")
            .model_class("my model")
            .build()
            .unwrap();

        assert_eq!(plan.plugin_name().as_str(), "_3_bad_name_");
        assert_eq!(plan.model_class().unwrap().as_str(), "my_model");
        assert_eq!(plan.model_name().unwrap().as_str(), "_3_bad_name_Model");
    }

    #[test]
    fn explicit_empty_name_is_rejected() {
        let err = GenerationPlan::builder(ws()).plugin_name("").build();
        assert_eq!(
            err,
            Err(DomainError::EmptyIdentifier {
                slot: "plugin name"
            })
        );

        let err = GenerationPlan::builder(ws()).model_name("").build();
        assert_eq!(
            err,
            Err(DomainError::EmptyIdentifier { slot: "model name" })
        );
    }

    #[test]
    fn model_named_like_plugin_is_rejected() {
        let err = GenerationPlan::builder(ws())
            .plugin_name("Same")
            .model_name("Same")
            .build();
        assert!(matches!(err, Err(DomainError::NameCollision { .. })));
    }

    #[test]
    fn roots_live_under_plugins_source() {
        let plan = GenerationPlan::builder(ws())
            .plugin_name("MyPlugin")
            .with_model(true)
            .build()
            .unwrap();

        assert_eq!(plan.plugin_root(), Path::new("/ws/PluginsSource/MyPlugin"));
        assert_eq!(
            plan.model_root().unwrap(),
            Path::new("/ws/PluginsSource/MyPluginModel")
        );
        assert_eq!(plan.plugin_dir().as_path(), Path::new("MyPlugin"));
    }

    #[test]
    fn remote_url_is_parameterized_by_model_name() {
        let remote = RemoteSource::new("https://git.example.org/team/", "main");
        let model = Identifier::new("Storage", "model name").unwrap();
        assert_eq!(
            remote.repository_url(&model),
            "https://git.example.org/team/Storage.git"
        );
        assert_eq!(remote.tag(), "main");

        assert_eq!(
            RemoteSource::default().repository_url(&model),
            "https://github.com/d3156/Storage.git"
        );
    }
}
