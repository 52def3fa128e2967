//! Implementation of the `pagesmith frameworks` command.

use serde::Serialize;

use pagesmith_adapters::InMemoryBackendRegistry;
use pagesmith_core::{
    application::ExportService,
    domain::{Framework, capabilities},
};

use crate::{
    cli::{FrameworksArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameworkRow {
    name: &'static str,
    display_name: &'static str,
    default_bundler: &'static str,
    bundlers: Vec<&'static str>,
    requires_typescript: bool,
    entry: &'static str,
}

impl FrameworkRow {
    fn new(framework: Framework) -> Self {
        let def = capabilities::find_framework(framework);
        Self {
            name: framework.as_str(),
            display_name: framework.display_name(),
            default_bundler: capabilities::infer_bundler(framework).as_str(),
            bundlers: def
                .map(|d| d.supported_bundlers.iter().map(|b| b.as_str()).collect())
                .unwrap_or_default(),
            requires_typescript: capabilities::requires_typescript(framework),
            entry: capabilities::entry_point(framework, false),
        }
    }
}

pub fn execute(args: FrameworksArgs, output: OutputManager) -> CliResult<()> {
    let registry =
        InMemoryBackendRegistry::with_builtin().with_cli_context(|| "loading backends")?;
    let service = ExportService::new(Box::new(registry));
    let rows: Vec<FrameworkRow> = service
        .backends()
        .with_cli_context(|| "listing backends")?
        .into_iter()
        .map(FrameworkRow::new)
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Export targets:")?;
            for row in &rows {
                let ts = if row.requires_typescript {
                    ", TypeScript only"
                } else {
                    ""
                };
                output.print(&format!(
                    "  {:<8} {:<20} bundlers: {}{ts}",
                    row.name,
                    row.display_name,
                    row.bundlers.join(", ")
                ))?;
            }
        }
        ListFormat::Json => output.json("framework list", &rows)?,
        ListFormat::List => {
            for row in &rows {
                output.raw(row.name)?;
            }
        }
        ListFormat::Csv => {
            output.raw("name,display_name,default_bundler,requires_typescript,entry")?;
            for row in &rows {
                output.raw(&format!(
                    "{},{},{},{},{}",
                    row.name,
                    row.display_name,
                    row.default_bundler,
                    row.requires_typescript,
                    row.entry
                ))?;
            }
        }
    }

    Ok(())
}
