//! Implementation of the `plugsmith new` command.
//!
//! Responsibility: collect answers (flags, prompts, config defaults), hand
//! them to the core as a plan, and display results. Generation rules live in
//! `plugsmith-core`.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use plugsmith_adapters::LocalFilesystem;
use plugsmith_core::{
    application::{GenerateService, GenerationReport},
    domain::{ArtifactSet, GenerationPlan, PlanBuilder, normalize},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::{self, Prompter},
};

/// Raw answers before normalization.  `None` leaves the choice to the core
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Answers {
    plugin_name: Option<String>,
    plugin_class: Option<String>,
    with_model: bool,
    model_name: Option<String>,
    model_class: Option<String>,
}

impl Answers {
    fn apply(self, mut builder: PlanBuilder) -> PlanBuilder {
        if let Some(name) = self.plugin_name {
            builder = builder.plugin_name(name);
        }
        if let Some(class) = self.plugin_class {
            builder = builder.plugin_class(class);
        }
        builder = builder.with_model(self.with_model);
        if self.with_model {
            if let Some(name) = self.model_name {
                builder = builder.model_name(name);
            }
            if let Some(class) = self.model_class {
                builder = builder.model_class(class);
            }
        }
        builder
    }
}

/// Execute the `plugsmith new` command.
///
/// Dispatch sequence:
/// 1. Locate the workspace
/// 2. Collect answers from flags, prompts and config defaults
/// 3. Resolve the plan and show it
/// 4. Guard existing projects, honour `--dry-run`, confirm
/// 5. Generate and print next steps
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    // 1. Workspace
    let start = match &args.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "failed to read current directory")?,
    };
    let workspace = service.locate_workspace(&start)?;
    info!(root = %workspace.root().display(), "Workspace located");
    output.info(&format!("Workspace: {}", workspace.root().display()))?;

    // 2. Answers
    let answers = if args.yes {
        answers_from_flags(&args, &config.defaults)
    } else {
        let mut prompter = prompt::session_prompter();
        collect_answers(&args, &config.defaults, prompter.as_mut())?
    };
    debug!(?answers, "Answers collected");

    // 3. Plan
    let builder = GenerationPlan::builder(workspace).remote(config.remote_source());
    let plan = service.plan(answers.apply(builder))?;
    show_plan(&plan, &output)?;

    // 4. Guards
    let existing = service.existing_roots(&plan);
    let artifacts = service.preview(&plan)?;

    if args.dry_run {
        return report_dry_run(&plan, &artifacts, &existing, &output);
    }

    if let Some(path) = existing.first() {
        if !args.force {
            return Err(CliError::ProjectExists { path: path.clone() });
        }
        for path in &existing {
            output.warning(&format!("Overwriting files in {}", path.display()))?;
        }
    }

    if !args.yes && !global.quiet && !output.is_json() {
        let mut prompter = prompt::session_prompter();
        if !prompter.confirm("Continue?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    let spinner = output.spinner(&format!("Generating {}...", plan.plugin_name()));
    let result = service.generate(&plan);
    spinner.finish_and_clear();
    let report = result?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Plugin '{}' created ({} files)",
        plan.plugin_name(),
        report.written.len()
    ))?;
    print_next_steps(&report, &output)?;

    Ok(())
}

// ── Answer collection ─────────────────────────────────────────────────────────

/// Non-interactive answers: flags first, then config defaults.
fn answers_from_flags(args: &NewArgs, defaults: &Defaults) -> Answers {
    Answers {
        plugin_name: Some(
            args.name
                .clone()
                .unwrap_or_else(|| defaults.plugin_name.clone()),
        ),
        plugin_class: args.class.clone(),
        with_model: args.model_choice().unwrap_or(defaults.with_model),
        model_name: args.model_name.clone(),
        model_class: args.model_class.clone(),
    }
}

/// Ask for every value the flags left open.
///
/// Prompt defaults mirror the core defaults so an empty answer and a
/// skipped prompt produce the same plan.
fn collect_answers(
    args: &NewArgs,
    defaults: &Defaults,
    prompter: &mut dyn Prompter,
) -> CliResult<Answers> {
    let plugin_name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.text("Plugin name", &defaults.plugin_name)?,
    };
    let stem = normalize(&plugin_name);

    let plugin_class = match &args.class {
        Some(class) => class.clone(),
        None => prompter.text("Plugin class", &format!("{stem}Plugin"))?,
    };

    let with_model = match args.model_choice() {
        Some(choice) => choice,
        None => prompter.confirm("Generate a model library?", defaults.with_model)?,
    };

    let (model_name, model_class) = if with_model {
        let name = match &args.model_name {
            Some(name) => name.clone(),
            None => prompter.text("Model name", &format!("{stem}Model"))?,
        };
        let class = match &args.model_class {
            Some(class) => class.clone(),
            None => prompter.text("Model class", &normalize(&name))?,
        };
        (Some(name), Some(class))
    } else {
        (None, None)
    };

    Ok(Answers {
        plugin_name: Some(plugin_name),
        plugin_class: Some(plugin_class),
        with_model,
        model_name,
        model_class,
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &GenerationPlan, out: &OutputManager) -> CliResult<()> {
    out.header("Plan")?;
    out.field("Plugin", plan.plugin_name())?;
    out.field("Class", plan.plugin_class())?;
    match plan.model() {
        Some(model) => {
            out.field("Model", &model.name)?;
            out.field("Model class", &model.class)?;
            out.field(
                "Model remote",
                format!(
                    "{} ({})",
                    plan.remote().repository_url(&model.name),
                    plan.remote().tag()
                ),
            )?;
        }
        None => out.field("Model", "none")?,
    }
    out.field("Location", plan.workspace().sources_dir().display())?;
    out.print("")?;
    Ok(())
}

#[derive(Serialize)]
struct DryRunEntry {
    path: PathBuf,
    bytes: usize,
    executable: bool,
}

#[derive(Serialize)]
struct DryRun<'a> {
    plan: &'a GenerationPlan,
    artifacts: Vec<DryRunEntry>,
    existing: &'a [PathBuf],
}

fn report_dry_run(
    plan: &GenerationPlan,
    artifacts: &ArtifactSet,
    existing: &[PathBuf],
    out: &OutputManager,
) -> CliResult<()> {
    let root = plan.workspace().sources_dir();

    if out.is_json() {
        let entries = artifacts
            .iter()
            .map(|a| DryRunEntry {
                path: root.join(a.path()),
                bytes: a.size(),
                executable: a.is_executable(),
            })
            .collect();
        out.json(&DryRun {
            plan,
            artifacts: entries,
            existing,
        })?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would write {} files under {}",
        artifacts.len(),
        root.display()
    ))?;
    for artifact in artifacts {
        let mark = if artifact.is_executable() { " (executable)" } else { "" };
        out.print(&format!("  {}{mark}", artifact.path()))?;
    }
    for path in existing {
        out.warning(&format!("{} already exists", path.display()))?;
    }
    Ok(())
}

fn print_next_steps(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  cd {}", report.plugin_root.display()))?;
    out.print("  ./build.sh")?;
    out.print(&format!(
        "  # the shared library lands in {}",
        report.plugins_output.display()
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
