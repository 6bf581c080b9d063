//! C++ sources: plugin entry point and model stubs.

use std::fmt::Write as _;

use crate::domain::plan::{GenerationPlan, ModelSpec};

/// Factory symbol the host resolves with `dlsym`.
pub const CREATE_SYMBOL: &str = "create_plugin";

/// Reclaimer symbol the host resolves with `dlsym`.
pub const DESTROY_SYMBOL: &str = "destroy_plugin";

const NS: &str = "d3156::PluginCore";

/// `PluginsSource/<plugin>/src/<plugin>.cpp`
pub fn plugin_cpp(plan: &GenerationPlan) -> String {
    let class = plan.plugin_class();
    let mut out = String::new();

    out.push_str("#include <PluginCore/IPlugin.hpp>\n");
    out.push_str("#include <PluginCore/IModel.hpp>\n");
    if let Some(model) = plan.model_class() {
        let _ = writeln!(out, "#include <{model}.hpp>");
    }
    out.push('\n');

    let register = match plan.model_class() {
        Some(model) => format!("        models.registerModel(new {model}());\n"),
        None => "        // Register models here: models.registerModel(new YourModel());\n".to_owned(),
    };

    let _ = write!(
        out,
        "class {class} final : public {NS}::IPlugin {{\n\
         public:\n\
         \x20   void registerArgs(d3156::Args::Builder& bldr) override {{\n\
         \x20       // Declare options here: bldr.addOption(...) / bldr.addParam(...) / bldr.addFlag(...)\n\
         \x20       (void)bldr;\n\
         \x20   }}\n\
         \n\
         \x20   void registerModels({NS}::ModelsStorage& models) override {{\n\
         {register}\
         \x20       (void)models;\n\
         \x20   }}\n\
         \n\
         \x20   void postInit() override {{\n\
         \x20       // Start threads or async jobs here if needed\n\
         \x20   }}\n\
         }};\n\
         \n\
         // ABI required by {NS}::Core (dlsym uses exact names)\n\
         extern \"C\" {NS}::IPlugin* {CREATE_SYMBOL}() {{\n\
         \x20   return new {class}();\n\
         }}\n\
         \n\
         extern \"C\" void {DESTROY_SYMBOL}({NS}::IPlugin* p) {{\n\
         \x20   delete p;\n\
         }}\n"
    );

    out
}

/// `PluginsSource/<model>/include/<ModelClass>.hpp`
pub fn model_hpp(model: &ModelSpec) -> String {
    let class = &model.class;
    format!(
        "#pragma once\n\
         #include <PluginCore/IModel.hpp>\n\
         \n\
         class {class} final : public {NS}::IModel {{\n\
         public:\n\
         \x20   {NS}::model_name name() override {{ return \"{class}\"; }}\n\
         \x20   int deleteOrder() override {{ return 0; }}\n\
         \n\
         \x20   void init() override {{\n\
         \x20       // Allocate and initialize resources here\n\
         \x20   }}\n\
         \n\
         \x20   void postInit() override {{\n\
         \x20   }}\n\
         }};\n"
    )
}

/// `PluginsSource/<model>/src/<ModelClass>.cpp`
pub fn model_cpp(model: &ModelSpec) -> String {
    format!(
        "#include \"{}.hpp\"\n\
         \n\
         // The implementation lives in the header for now.\n\
         // Keep this file for future expansion.\n",
        model.class
    )
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
    fn plugin_exports_exact_abi_names() {
        let text = plugin_cpp(&plan(false));
        assert!(text.contains("extern \"C\" d3156::PluginCore::IPlugin* create_plugin() {"));
        assert!(text.contains("extern \"C\" void destroy_plugin(d3156::PluginCore::IPlugin* p) {"));
        assert_eq!(text.matches("extern \"C\"").count(), 2);
        assert!(text.contains("return new MyPluginPlugin();"));
    }

    #[test]
    fn plugin_implements_lifecycle_hooks() {
        let text = plugin_cpp(&plan(false));
        assert!(text.contains("class MyPluginPlugin final : public d3156::PluginCore::IPlugin {"));
        assert!(text.contains("void registerArgs(d3156::Args::Builder& bldr) override {"));
        assert!(text.contains("void registerModels(d3156::PluginCore::ModelsStorage& models) override {"));
        assert!(text.contains("void postInit() override {"));
    }

    #[test]
    fn plugin_without_model_registers_nothing() {
        let text = plugin_cpp(&plan(false));
        assert!(!text.contains("\n        models.registerModel(new "));
        assert!(!text.contains("#include <MyPluginModel.hpp>"));
    }

    #[test]
    fn plugin_with_model_includes_and_registers_it() {
        let text = plugin_cpp(&plan(true));
        assert!(text.contains("#include <MyPluginModel.hpp>\n"));
        assert!(text.contains("        models.registerModel(new MyPluginModel());\n"));
    }

    #[test]
    fn model_header_defines_type_and_hooks() {
        let p = plan(true);
        let text = model_hpp(p.model().unwrap());
        assert!(text.starts_with("#pragma once\n"));
        assert!(text.contains("class MyPluginModel final : public d3156::PluginCore::IModel {"));
        assert!(text.contains("name() override { return \"MyPluginModel\"; }"));
        assert!(text.contains("int deleteOrder() override { return 0; }"));
        assert!(text.contains("void init() override {"));
        assert!(text.contains("void postInit() override {"));
    }

    #[test]
    fn model_source_includes_its_header() {
        let p = plan(true);
        assert!(model_cpp(p.model().unwrap()).starts_with("#include \"MyPluginModel.hpp\"\n"));
    }
}
