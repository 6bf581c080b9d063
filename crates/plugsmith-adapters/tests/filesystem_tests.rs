//! End-to-end generation through both filesystem adapters.

use std::path::Path;

use plugsmith_adapters::{LocalFilesystem, MemoryFilesystem};
use plugsmith_core::prelude::*;

#[test]
fn memory_filesystem_generation() {
    let fs = MemoryFilesystem::new();
    fs.add_workspace("/ws");
    fs.add_dir("/ws/PluginsSource/Existing/src");

    let service = GenerateService::new(Box::new(fs.clone()));
    let workspace = service
        .locate_workspace("/ws/PluginsSource/Existing/src")
        .unwrap();
    let plan = service
        .plan(
            GenerationPlan::builder(workspace)
                .plugin_name("Net")
                .model_name("NetState")
                .model_class("NetStateModel"),
        )
        .unwrap();
    service.generate(&plan).unwrap();

    let files: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(
        files,
        vec![
            "/ws/PluginsSource/Net/.gitignore",
            "/ws/PluginsSource/Net/CMakeLists.txt",
            "/ws/PluginsSource/Net/build.sh",
            "/ws/PluginsSource/Net/src/Net.cpp",
            "/ws/PluginsSource/NetState/CMakeLists.txt",
            "/ws/PluginsSource/NetState/include/NetStateModel.hpp",
            "/ws/PluginsSource/NetState/src/NetStateModel.cpp",
        ]
    );
    assert!(fs.is_executable("/ws/PluginsSource/Net/build.sh"));

    let cmake = fs.read_file("/ws/PluginsSource/Net/CMakeLists.txt").unwrap();
    assert!(cmake.contains("target_link_libraries(Net PRIVATE NetState)"));
    assert!(cmake.contains("GIT_REPOSITORY https://github.com/d3156/NetState.git"));

    let cpp = fs.read_file("/ws/PluginsSource/Net/src/Net.cpp").unwrap();
    assert!(cpp.contains("#include <NetStateModel.hpp>"));
}

#[test]
fn local_filesystem_generation_from_nested_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    for dir in ["Plugins", "PluginsSource/deep/er", "tools"] {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let workspace = service
        .locate_workspace(root.join("PluginsSource/deep/er"))
        .unwrap();
    assert_eq!(workspace.root(), std::fs::canonicalize(root).unwrap());

    let plan = service
        .plan(GenerationPlan::builder(workspace).plugin_name("disk-plugin"))
        .unwrap();
    let report = service.generate(&plan).unwrap();
    assert_eq!(report.written.len(), 4);

    let plugin = report.plugin_root;
    assert!(plugin.ends_with("PluginsSource/disk_plugin"));
    assert!(plugin.join("src/disk_plugin.cpp").is_file());
    assert!(plugin.join(".gitignore").is_file());
    assert!(!root.join("PluginsSource/disk_pluginModel").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(plugin.join("build.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o755, 0o755);
    }
}

#[test]
fn local_filesystem_without_workspace() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("Plugins")).unwrap();

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let err = service.locate_workspace(tmp.path()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(!Path::new(&tmp.path().join("PluginsSource")).exists());
}

#[test]
fn local_filesystem_start_dir_not_created_yet() {
    let tmp = tempfile::tempdir().unwrap();
    for dir in ["Plugins", "PluginsSource", "tools"] {
        std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let workspace = service
        .locate_workspace(tmp.path().join("PluginsSource/NotYet/src"))
        .unwrap();
    assert_eq!(workspace.root(), std::fs::canonicalize(tmp.path()).unwrap());
    assert!(!tmp.path().join("PluginsSource/NotYet").exists());
}

#[test]
fn memory_filesystem_start_dir_not_created_yet() {
    let fs = MemoryFilesystem::new();
    fs.add_workspace("/ws");

    let service = GenerateService::new(Box::new(fs));
    let workspace = service.locate_workspace("/ws/PluginsSource/NotYet").unwrap();
    assert_eq!(workspace.root(), Path::new("/ws"));
}
