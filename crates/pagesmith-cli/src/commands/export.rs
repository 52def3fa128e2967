//! Implementation of the `pagesmith export` command.
//!
//! Responsibility: read the component tree, turn CLI arguments into an
//! `ExportConfig`, run the export service with a progress bar, write the
//! result and report it. No generation logic lives here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, instrument};

use pagesmith_adapters::{InMemoryBackendRegistry, LocalFilesystem, TracingProgress};
use pagesmith_core::{
    application::{ExportService, ProjectWriter, ports::ProgressSink},
    domain::{ComponentNode, ExportConfig, ExportMetadata, ExportResult, FileKind},
};

use crate::{
    cli::{ExportArgs, OutputFormat, ReportFormat, global::GlobalArgs},
    commands::options::build_config,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `pagesmith export` command.
///
/// Dispatch sequence:
/// 1. Read and parse the component tree
/// 2. Build the export configuration (flags, then config defaults)
/// 3. Refuse or confirm an existing output directory
/// 4. Run the export with a progress bar
/// 5. Write the project unless `--dry-run`
/// 6. Report files, dependencies and metadata
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(
    args: ExportArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Component tree
    let nodes = read_tree(&args.input)?;
    debug!(roots = nodes.len(), "Component tree parsed");

    // 2. Configuration
    let project_name = project_name(&args);
    let export_config = build_config(&args.target, project_name.as_deref(), &config.defaults)?;
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_config.project_name()));

    debug!(config = %export_config, out = %out_dir.display(), "Export configured");

    // 3. Existing directory
    if out_dir.exists() && !args.dry_run {
        if !args.force {
            return Err(CliError::ProjectExists { path: out_dir });
        }
        if !args.yes && !global.quiet && !confirm_overwrite(&out_dir, &output)? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Export
    let registry = InMemoryBackendRegistry::with_builtin().with_cli_context(|| "loading backends")?;
    let bar = progress_bar(&output);
    let sink = {
        let bar = bar.clone();
        move |percent: u8, message: &str| {
            TracingProgress.report(percent, message);
            bar.set_position(u64::from(percent));
            bar.set_message(message.to_string());
        }
    };
    let service = ExportService::new(Box::new(registry)).with_progress(sink);

    let outcome = service.export(&nodes, &export_config);
    bar.finish_and_clear();
    let result = outcome?;

    info!(
        files = result.files.len(),
        bytes = result.total_size(),
        "Export finished"
    );

    // 5. Write
    if !args.dry_run {
        ProjectWriter::new(Box::new(LocalFilesystem::new()))
            .overwrite(args.force)
            .write(&result, &out_dir)
            .with_cli_context(|| "writing project")?;
    }

    // 6. Report
    let json = args.format == ReportFormat::Json || output.format() == OutputFormat::Json;
    if json {
        output.json("export report", &ExportReport::new(&result, &out_dir, args.dry_run))
    } else {
        report_human(&result, &export_config, &out_dir, args.dry_run, &output)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Read a component tree: one component object or an array of them.
pub fn read_tree(path: &Path) -> CliResult<Vec<ComponentNode>> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: e,
        },
    })?;

    let invalid = |source| CliError::InvalidTree {
        path: path.to_path_buf(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(&text).map_err(invalid)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(invalid)
    } else {
        serde_json::from_value(value).map(|node| vec![node]).map_err(invalid)
    }
}

/// `--name`, else the lowercased output directory name.
fn project_name(args: &ExportArgs) -> Option<String> {
    args.name.clone().or_else(|| {
        args.out
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .map(str::to_lowercase)
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn progress_bar(output: &OutputManager) -> ProgressBar {
    if !output.is_interactive() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(100);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(dir: &Path, output: &OutputManager) -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if !output.is_interactive() || !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("Write into existing directory '{}'?", dir.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::Prompt {
            message: e.to_string(),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_dir: &Path, _output: &OutputManager) -> CliResult<bool> {
    Ok(true)
}

fn report_human(
    result: &ExportResult,
    config: &ExportConfig,
    out_dir: &Path,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let framework = config.framework().display_name();

    if dry_run {
        output.header(&format!(
            "Dry run: would write {} files ({framework}) to {}",
            result.files.len(),
            out_dir.display()
        ))?;
        for file in &result.files {
            output.print(&format!(
                "  {:<56} {:<13} {:>7} B",
                file.path.as_str(),
                file.kind.as_str(),
                file.size()
            ))?;
        }
    } else {
        output.success(&format!(
            "Exported {} files ({framework}) to {}",
            result.files.len(),
            out_dir.display()
        ))?;
    }

    let meta = &result.metadata;
    output.print("")?;
    output.detail(&format!(
        "  Components:    {}",
        result.files_of_kind(FileKind::Component).count()
    ))?;
    output.detail(&format!(
        "  Packages:      {} dependencies, {} dev dependencies",
        result.dependencies.len(),
        result.dev_dependencies.len()
    ))?;
    output.detail(&format!(
        "  Accessibility: WCAG {} (score {})",
        meta.accessibility.wcag_level, meta.accessibility.score
    ))?;
    output.detail(&format!("  SEO score:     {}", meta.seo.score))?;
    output.detail(&format!(
        "  Lighthouse:    ~{} (estimate)",
        meta.performance.lighthouse_score
    ))?;
    output.detail(&format!(
        "  Generated at:  {}",
        meta.generated_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
    ))?;

    if !dry_run && !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", out_dir.display()))?;
        output.print("  npm install")?;
        if result.scripts.contains_key("dev") {
            output.print("  npm run dev")?;
        }
    }

    Ok(())
}

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportReport<'a> {
    out_dir: String,
    dry_run: bool,
    files: Vec<FileEntry<'a>>,
    dependencies: &'a BTreeMap<String, String>,
    dev_dependencies: &'a BTreeMap<String, String>,
    scripts: &'a BTreeMap<String, String>,
    metadata: &'a ExportMetadata,
}

#[derive(Debug, Serialize)]
struct FileEntry<'a> {
    path: &'a str,
    #[serde(rename = "type")]
    kind: FileKind,
    bytes: usize,
}

impl<'a> ExportReport<'a> {
    fn new(result: &'a ExportResult, out_dir: &Path, dry_run: bool) -> Self {
        Self {
            out_dir: out_dir.display().to_string(),
            dry_run,
            files: result
                .files
                .iter()
                .map(|f| FileEntry {
                    path: f.path.as_str(),
                    kind: f.kind,
                    bytes: f.size(),
                })
                .collect(),
            dependencies: &result.dependencies,
            dev_dependencies: &result.dev_dependencies,
            scripts: &result.scripts,
            metadata: &result.metadata,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TargetArgs;
    use std::io::Write as _;

    fn export_args(out: Option<&str>, name: Option<&str>) -> ExportArgs {
        ExportArgs {
            input: PathBuf::from("page.json"),
            target: TargetArgs::default(),
            name: name.map(String::from),
            out: out.map(PathBuf::from),
            force: false,
            yes: false,
            dry_run: false,
            format: ReportFormat::Human,
        }
    }

    fn tree_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn reads_a_forest() {
        let file = tree_file(r#"[{"id":"a","type":"hero"},{"id":"b","type":"footer"}]"#);
        let nodes = read_tree(file.path()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].kind, "footer");
    }

    #[test]
    fn reads_a_single_component() {
        let file = tree_file(r#"{"id":"cta","type":"button","props":{"text":"Go"}}"#);
        let nodes = read_tree(file.path()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "cta");
    }

    #[test]
    fn malformed_json_is_invalid_tree() {
        let file = tree_file("{ not json");
        assert!(matches!(
            read_tree(file.path()),
            Err(CliError::InvalidTree { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_tree(Path::new("/no/such/page.json")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn name_defaults_to_out_dir() {
        assert_eq!(
            project_name(&export_args(Some("./sites/Landing"), None)).as_deref(),
            Some("landing")
        );
        assert_eq!(
            project_name(&export_args(Some("./x"), Some("acme"))).as_deref(),
            Some("acme")
        );
        assert_eq!(project_name(&export_args(None, None)), None);
    }
}
