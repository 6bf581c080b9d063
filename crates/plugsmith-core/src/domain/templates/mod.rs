//! Template composer.
//!
//! Pure functions from a [`GenerationPlan`] to the full text of every
//! generated file. Output is deterministic: no timestamps, no randomness,
//! no filesystem access.
//!
//! Artifact paths are relative to `<workspace>/PluginsSource`:
//!
//! ```text
//! <Plugin>/CMakeLists.txt
//! <Plugin>/src/<Plugin>.cpp
//! <Plugin>/build.sh                  (executable)
//! <Plugin>/.gitignore
//! <Model>/CMakeLists.txt             (with a model only)
//! <Model>/include/<ModelClass>.hpp   (with a model only)
//! <Model>/src/<ModelClass>.cpp       (with a model only)
//! ```

pub mod cmake;
pub mod scripts;
pub mod sources;

use tracing::{debug, instrument};

use crate::domain::{
    artifact::{Artifact, ArtifactSet, ProjectFile, RelativePath},
    identifier::Identifier,
    plan::GenerationPlan,
};

pub use cmake::{DependencySource, ModelDependency};
pub use sources::{CREATE_SYMBOL, DESTROY_SYMBOL};

/// Name of the build configuration file in every project.
pub const BUILD_FILE: &str = "CMakeLists.txt";

/// Name of the build driver script.
pub const BUILD_SCRIPT: &str = "build.sh";

/// Compose every artifact for `plan`, plugin files first.
///
/// Never fails: branching is total over the model choice.
#[instrument(skip_all, fields(plugin = %plan.plugin_name(), with_model = plan.with_model()))]
pub fn compose(plan: &GenerationPlan) -> ArtifactSet {
    let plugin = plan.plugin_name();
    let mut set = ArtifactSet::new();

    set.push(Artifact::new(
        file(plugin, ProjectFile::Root(BUILD_FILE)),
        cmake::plugin_cmake(plan),
    ));
    set.push(Artifact::new(
        file(plugin, source(plugin)),
        sources::plugin_cpp(plan),
    ));
    set.push(Artifact::executable(
        file(plugin, ProjectFile::Root(BUILD_SCRIPT)),
        scripts::build_sh(),
    ));
    set.push(Artifact::new(
        file(plugin, ProjectFile::Root(".gitignore")),
        scripts::GITIGNORE.to_owned(),
    ));

    if let Some(model) = plan.model() {
        set.push(Artifact::new(
            file(&model.name, ProjectFile::Root(BUILD_FILE)),
            cmake::model_cmake(model),
        ));
        set.push(Artifact::new(
            file(
                &model.name,
                ProjectFile::Named {
                    dir: "include",
                    stem: &model.class,
                    ext: "hpp",
                },
            ),
            sources::model_hpp(model),
        ));
        set.push(Artifact::new(
            file(&model.name, source(&model.class)),
            sources::model_cpp(model),
        ));
    }

    debug!(artifacts = set.len(), "Composed artifacts");
    set
}

fn file(project: &Identifier, location: ProjectFile<'_>) -> RelativePath {
    RelativePath::from((project, location))
}

/// `src/<stem>.cpp`
fn source(stem: &Identifier) -> ProjectFile<'_> {
    ProjectFile::Named {
        dir: "src",
        stem,
        ext: "cpp",
    }
}
