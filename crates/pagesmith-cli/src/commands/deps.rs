//! Implementation of the `pagesmith deps` command.
//!
//! Runs the dependency resolver alone; nothing is generated.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::instrument;

use pagesmith_core::domain::{DependencySet, ExportConfig, resolve_dependencies};

use crate::{
    cli::{DepsArgs, OutputFormat, ReportFormat},
    commands::options::build_config,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DepsReport<'a> {
    config: &'a ExportConfig,
    #[serde(flatten)]
    set: &'a DependencySet,
}

#[instrument(skip_all)]
pub fn execute(args: DepsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let export_config = build_config(&args.target, None, &config.defaults)?;
    let set = resolve_dependencies(&export_config);

    if args.format == ReportFormat::Json || output.format() == OutputFormat::Json {
        return output.json(
            "dependency report",
            &DepsReport {
                config: &export_config,
                set: &set,
            },
        );
    }

    output.header(&format!("Resolved packages for {export_config}"))?;
    section(&output, "dependencies", &set.dependencies)?;
    section(&output, "devDependencies", &set.dev_dependencies)?;
    section(&output, "scripts", &set.scripts)?;
    Ok(())
}

fn section(output: &OutputManager, title: &str, entries: &BTreeMap<String, String>) -> CliResult<()> {
    output.print("")?;
    output.print(&format!("{title} ({}):", entries.len()))?;
    if entries.is_empty() {
        output.detail("  (none)")?;
    }
    for (name, value) in entries {
        output.print(&format!("  {name:<36} {value}"))?;
    }
    Ok(())
}
