//! CMake build configuration for the plugin and model projects.

use std::fmt::Write as _;

use crate::domain::{
    identifier::Identifier,
    plan::{GenerationPlan, ModelSpec, RemoteSource},
    workspace::PLUGINS_DIR,
};

/// Package providing the plugin interfaces.
pub const PLUGIN_CORE_PACKAGE: &str = "PluginCore";

/// Imported target exported by [`PLUGIN_CORE_PACKAGE`].
pub const PLUGIN_CORE_TARGET: &str = "d3156::PluginCore";

const SRC_DIR: &str = "${CMAKE_CURRENT_SOURCE_DIR}";
const BIN_DIR: &str = "${CMAKE_BINARY_DIR}";

/// How the plugin build obtains the model library.
///
/// The plugin's CMakeLists decides at configure time; both arms are rendered
/// from the same [`ModelDependency`], so they cannot disagree on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySource {
    /// Sibling project absent: fetch it from the remote repository.
    Missing,
    /// Sibling project present: build it as an in-tree subproject.
    LocalSibling,
}

/// Everything the dependency block needs to know about the model.
#[derive(Debug, Clone, Copy)]
pub struct ModelDependency<'a> {
    /// Target name declared by the model's own CMakeLists.
    pub target: &'a Identifier,
    pub remote: &'a RemoteSource,
}

impl<'a> ModelDependency<'a> {
    pub fn new(model: &'a ModelSpec, remote: &'a RemoteSource) -> Self {
        Self {
            target: &model.name,
            remote,
        }
    }

    /// Sibling directory, as seen from the plugin's source dir.
    fn sibling_dir(&self) -> String {
        format!("{SRC_DIR}/../{}", self.target)
    }

    /// Library target the plugin links against. Both arms make this one
    /// target available, so it does not depend on the arm taken.
    pub fn linked_target(&self) -> &'a Identifier {
        self.target
    }

    /// Render the acquisition statements for one arm.
    pub fn render(&self, source: DependencySource) -> String {
        let target = self.target;
        match source {
            DependencySource::Missing => format!(
                "    message(STATUS \"{target} not found next to this plugin, downloading...\")\n\
                 \x20   include(FetchContent)\n\
                 \x20   FetchContent_Declare(\n\
                 \x20       {target}\n\
                 \x20       GIT_REPOSITORY {url}\n\
                 \x20       GIT_TAG {tag}\n\
                 \x20   )\n\
                 \x20   FetchContent_MakeAvailable({target})\n",
                url = self.remote.repository_url(target),
                tag = self.remote.tag(),
            ),
            DependencySource::LocalSibling => format!(
                "    add_subdirectory(\"{sibling}\"\n\
                 \x20                    \"{BIN_DIR}/_deps/{target}\")\n",
                sibling = self.sibling_dir(),
            ),
        }
    }

    /// The conditional fetch-or-local block followed by the link directive.
    pub fn render_block(&self, plugin: &Identifier) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "if(NOT EXISTS \"{}/CMakeLists.txt\")",
            self.sibling_dir()
        );
        out.push_str(&self.render(DependencySource::Missing));
        out.push_str("else()\n");
        out.push_str(&self.render(DependencySource::LocalSibling));
        out.push_str("endif()\n\n");

        let _ = writeln!(
            out,
            "target_link_libraries({plugin} PRIVATE {})",
            self.linked_target()
        );
        out
    }
}

/// Shared project preamble: version, language standard, compile definition.
fn preamble(out: &mut String, project: &Identifier) {
    let _ = write!(
        out,
        "cmake_minimum_required(VERSION 3.16)\n\
         project({project}\n\
         \x20 VERSION 1.0.0\n\
         \x20 LANGUAGES CXX\n\
         )\n\
         \n\
         add_compile_definitions({project}_VERSION=\"${{PROJECT_VERSION}}\")\n\
         \n\
         set(CMAKE_CXX_STANDARD 20)\n\
         set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\
         set(CMAKE_CXX_EXTENSIONS OFF)\n\
         \n"
    );
}

fn source_glob(out: &mut String, patterns: &[&str]) {
    out.push_str("file(GLOB_RECURSE SRC_FILES\n  CONFIGURE_DEPENDS\n");
    for pattern in patterns {
        let _ = writeln!(out, "  {SRC_DIR}/{pattern}");
    }
    out.push_str(")\n\n");
}

/// `PluginsSource/<plugin>/CMakeLists.txt`
pub fn plugin_cmake(plan: &GenerationPlan) -> String {
    let plugin = plan.plugin_name();
    let plugins_out = format!("{SRC_DIR}/../../{PLUGINS_DIR}");
    let mut out = String::new();

    preamble(&mut out, plugin);
    source_glob(&mut out, &["src/*.cpp", "src/*.hpp", "src/*.h"]);

    let _ = write!(
        out,
        "add_library({plugin} SHARED ${{SRC_FILES}})\n\
         \n\
         target_include_directories({plugin}\n\
         \x20 PRIVATE\n\
         \x20   {SRC_DIR}/include\n\
         )\n\
         \n\
         # Put the resulting shared object into <workspace>/{PLUGINS_DIR}\n\
         set_target_properties({plugin} PROPERTIES\n\
         \x20 LIBRARY_OUTPUT_DIRECTORY \"{plugins_out}\"\n\
         \x20 RUNTIME_OUTPUT_DIRECTORY \"{plugins_out}\"\n\
         \x20 OUTPUT_NAME \"{plugin}\"\n\
         )\n\
         \n\
         find_package({PLUGIN_CORE_PACKAGE} REQUIRED)\n\
         target_link_libraries({plugin} PRIVATE {PLUGIN_CORE_TARGET})\n"
    );

    if let Some(model) = plan.model() {
        out.push('\n');
        out.push_str(&ModelDependency::new(model, plan.remote()).render_block(plugin));
    }

    out
}

/// `PluginsSource/<model>/CMakeLists.txt`
pub fn model_cmake(model: &ModelSpec) -> String {
    let name = &model.name;
    let mut out = String::new();

    preamble(&mut out, name);
    source_glob(&mut out, &["src/*.cpp", "include/*.hpp", "include/*.h"]);

    let _ = write!(
        out,
        "add_library({name} STATIC ${{SRC_FILES}})\n\
         \n\
         target_include_directories({name}\n\
         \x20 PUBLIC\n\
         \x20   {SRC_DIR}/include\n\
         )\n"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workspace::Workspace;

    fn plan(with_model: bool) -> GenerationPlan {
        GenerationPlan::builder(Workspace::new("/ws"))
            .plugin_name("MyPlugin")
            .with_model(with_model)
            .build()
            .unwrap()
    }

    #[test]
    fn plugin_cmake_declares_shared_library() {
        let text = plugin_cmake(&plan(false));
        assert!(text.contains("project(MyPlugin\n"));
        assert!(text.contains("add_library(MyPlugin SHARED ${SRC_FILES})"));
        assert!(text.contains("OUTPUT_NAME \"MyPlugin\""));
        assert!(text.contains(
            "LIBRARY_OUTPUT_DIRECTORY \"${CMAKE_CURRENT_SOURCE_DIR}/../../Plugins\""
        ));
        assert!(text.contains("find_package(PluginCore REQUIRED)"));
        assert!(text.contains("target_link_libraries(MyPlugin PRIVATE d3156::PluginCore)"));
        assert!(text.contains("add_compile_definitions(MyPlugin_VERSION=\"${PROJECT_VERSION}\")"));
    }

    #[test]
    fn plugin_cmake_without_model_has_no_dependency_block() {
        let text = plugin_cmake(&plan(false));
        assert!(!text.contains("FetchContent"));
        assert!(!text.contains("add_subdirectory"));
    }

    #[test]
    fn plugin_cmake_with_model_renders_both_arms() {
        let text = plugin_cmake(&plan(true));
        assert!(text.contains(
            "if(NOT EXISTS \"${CMAKE_CURRENT_SOURCE_DIR}/../MyPluginModel/CMakeLists.txt\")"
        ));
        assert!(text.contains("GIT_REPOSITORY https://github.com/d3156/MyPluginModel.git"));
        assert!(text.contains("GIT_TAG master"));
        assert!(text.contains("FetchContent_MakeAvailable(MyPluginModel)"));
        assert!(text.contains("add_subdirectory(\"${CMAKE_CURRENT_SOURCE_DIR}/../MyPluginModel\""));
        assert!(text.contains("\"${CMAKE_BINARY_DIR}/_deps/MyPluginModel\")"));
        assert!(text.contains("target_link_libraries(MyPlugin PRIVATE MyPluginModel)"));

        let if_pos = text.find("if(NOT EXISTS").unwrap();
        let else_pos = text.find("else()").unwrap();
        let end_pos = text.find("endif()").unwrap();
        let fetch_pos = text.find("FetchContent_Declare").unwrap();
        let sub_pos = text.find("add_subdirectory").unwrap();
        assert!(if_pos < fetch_pos && fetch_pos < else_pos);
        assert!(else_pos < sub_pos && sub_pos < end_pos);
    }

    #[test]
    fn both_arms_link_the_same_target() {
        let p = plan(true);
        let dep = ModelDependency::new(p.model().unwrap(), p.remote());
        let target = dep.linked_target().as_str();

        let fetched = dep.render(DependencySource::Missing);
        assert!(fetched.contains(&format!("FetchContent_Declare(\n        {target}\n")));
        assert!(fetched.contains(&format!("FetchContent_MakeAvailable({target})")));

        let local = dep.render(DependencySource::LocalSibling);
        assert!(local.contains(&format!("/../{target}\"")));
        assert!(local.contains(&format!("_deps/{target}\")")));

        let block = dep.render_block(p.plugin_name());
        assert!(block.ends_with(&format!("target_link_libraries(MyPlugin PRIVATE {target})\n")));
    }

    #[test]
    fn model_cmake_declares_static_library_with_public_include() {
        let p = plan(true);
        let text = model_cmake(p.model().unwrap());
        assert!(text.contains("project(MyPluginModel\n"));
        assert!(text.contains("add_library(MyPluginModel STATIC ${SRC_FILES})"));
        assert!(text.contains("target_include_directories(MyPluginModel\n  PUBLIC\n"));
        assert!(text.contains("${CMAKE_CURRENT_SOURCE_DIR}/include/*.hpp"));
    }
}
