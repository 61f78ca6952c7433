//! Implementation of the default `tezgen [NAME]` action.
//!
//! Responsibility: obtain the name, call the core scaffold service, and
//! display the result. Layout rules live in `tezgen-core`.

use std::path::Path;

use tracing::{info, instrument, warn};

use tezgen_adapters::LocalFilesystem;
use tezgen_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{DomainError, TargetName},
};

use crate::{
    cli::{CreateArgs, GlobalArgs, OutputFormat},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt,
};

/// Execute the create action.
///
/// Dispatch sequence:
/// 1. Take the name from the argument or prompt for it
/// 2. Reject an empty name with a message (not a failure)
/// 3. Scaffold into the current directory, or preview with `--dry-run`
/// 4. Report the result in the selected format
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: CreateArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let raw = match args.name {
        Some(name) => name,
        None => prompt::ask_target_name()?,
    };

    let name = match TargetName::new(raw) {
        Ok(name) => name,
        Err(DomainError::EmptyTargetName) => {
            warn!("Empty target name, nothing to do");
            output.print(&format!("Error: {}", DomainError::EmptyTargetName))?;
            return Ok(());
        }
        Err(other) => return Err(CliError::Core(other.into())),
    };

    if name.is_blank() {
        warn!(target_name = ?name.as_str(), "Target name is only whitespace");
        output.warning("The target name consists only of whitespace; it is used verbatim")?;
    }
    if name.is_rooted() {
        warn!(target_name = %name, "Target name is an absolute path");
        output.warning(&format!(
            "'{name}' is an absolute path, so the target is created there; include folders are named '{}'",
            name.include_leaf().display()
        ))?;
    } else if name.has_path_separator() {
        warn!(target_name = %name, "Target name contains a path separator");
        output.warning(&format!(
            "'{name}' contains a path separator, so the target is nested below the working directory"
        ))?;
    }

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let output_dir = Path::new("");

    let report = if args.dry_run {
        service.preview(&name, output_dir)
    } else {
        service.scaffold(&name, output_dir)
    }
    .with_cli_context(|| "scaffolding target")?;

    info!(
        target_name = %report.target,
        location = %report.location.display(),
        overwritten = report.build_file_overwritten,
        "Create finished"
    );

    render_report(&report, global, output)
}

fn render_report(report: &ScaffoldReport, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(report)?,
        OutputFormat::Human => render_human(report, global, output)?,
        OutputFormat::Plain | OutputFormat::Auto => render_plain(report, output)?,
    }
    Ok(())
}

fn render_plain(report: &ScaffoldReport, output: &OutputManager) -> std::io::Result<()> {
    if report.dry_run {
        output.print(&format!(
            "Dry run: would create target structure for: {}",
            report.target
        ))?;
        for dir in &report.directories {
            output.print(&format!("  {}", dir.display()))?;
        }
        output.print(&format!("  {}", report.build_file.display()))?;
    } else {
        output.print(&format!(
            "Successfully created target structure for: {}",
            report.target
        ))?;
    }
    output.print(&format!("Location: {}", report.location.display()))
}

fn render_human(
    report: &ScaffoldReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> std::io::Result<()> {
    if report.dry_run {
        output.info(&format!(
            "Dry run: would create target structure for: {}",
            report.target
        ))?;
        for dir in &report.directories {
            output.print(&format!("  {}/", dir.display()))?;
        }
        let note = if report.build_file_overwritten {
            " (would be overwritten)"
        } else {
            ""
        };
        output.print(&format!("  {}{note}", report.build_file.display()))?;
        return output.print(&format!("Location: {}", report.location.display()));
    }

    output.success(&format!(
        "Successfully created target structure for: {}",
        report.target
    ))?;
    output.print(&format!("Location: {}", report.location.display()))?;

    if report.build_file_overwritten {
        output.warning(&format!(
            "Replaced existing {}",
            report.build_file.display()
        ))?;
    }

    if global.verbose > 0 {
        output.print("")?;
        output.header("Directories:")?;
        for dir in &report.directories {
            output.print(&format!("  {}", dir.display()))?;
        }
    }

    Ok(())
}
