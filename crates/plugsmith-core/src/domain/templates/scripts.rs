//! Plan-independent helper files.

use crate::domain::workspace::PLUGINS_DIR;

/// Entries ignored by git in a generated plugin project.
pub const GITIGNORE: &str = "build\n.cache\nrelease\n_CPack_Packages\n*.deb\n*/build\n";

/// `PluginsSource/<plugin>/build.sh`
///
/// Paths are computed from the script's own location, so the content does
/// not depend on the plan.
pub fn build_sh() -> String {
    format!(
        r#"#!/usr/bin/env bash
set -euo pipefail

ROOT="$(cd "$(dirname "${{BASH_SOURCE[0]}}")" && pwd)"
BUILD_DIR="${{ROOT}}/build"

cmake -S "${{ROOT}}" -B "${{BUILD_DIR}}" -DCMAKE_BUILD_TYPE=Release
cmake --build "${{BUILD_DIR}}" --config Release

echo
echo "[OK] Build finished."
echo "Plugin shared object should be in: ${{ROOT}}/../../{PLUGINS_DIR}"
"#
    )
}
