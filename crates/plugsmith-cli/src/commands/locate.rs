//! `plugsmith locate` - show the workspace a directory belongs to.

use serde::Serialize;
use tracing::instrument;

use plugsmith_adapters::LocalFilesystem;
use plugsmith_core::{
    application::WorkspaceLocator,
    domain::Workspace,
};

use crate::{
    cli::LocateArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Located {
    root: String,
    plugins: String,
    sources: String,
    tools: String,
}

impl From<&Workspace> for Located {
    fn from(ws: &Workspace) -> Self {
        Self {
            root: ws.root().display().to_string(),
            plugins: ws.plugins_dir().display().to_string(),
            sources: ws.sources_dir().display().to_string(),
            tools: ws.tools_dir().display().to_string(),
        }
    }
}

#[instrument(skip_all)]
pub fn execute(args: LocateArgs, output: OutputManager) -> CliResult<()> {
    let start = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().with_cli_context(|| "failed to read current directory")?,
    };

    let filesystem = LocalFilesystem::new();
    let workspace = WorkspaceLocator::new(&filesystem).locate(&start)?;
    let located = Located::from(&workspace);

    if output.is_json() {
        output.json(&located)?;
        return Ok(());
    }

    output.success(&format!("Workspace: {}", located.root))?;
    output.field("Plugins", &located.plugins)?;
    output.field("Sources", &located.sources)?;
    output.field("Tools", &located.tools)?;
    Ok(())
}
