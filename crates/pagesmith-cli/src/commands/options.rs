//! Turning `TargetArgs` plus config defaults into an `ExportConfig`.

use std::str::FromStr;

use pagesmith_core::domain::{Bundler, ExportConfig, Framework, Styling, Testing};

use crate::{
    cli::TargetArgs,
    config::Defaults,
    error::{CliError, CliResult},
};

/// Build the export configuration for a command.
///
/// Flags win over `[defaults]`; anything still unset is inferred by the
/// core builder.
pub(crate) fn build_config(
    args: &TargetArgs,
    project_name: Option<&str>,
    defaults: &Defaults,
) -> CliResult<ExportConfig> {
    let framework = match args.framework {
        Some(fw) => Framework::from(fw),
        None => match &defaults.framework {
            Some(raw) => parse_default::<Framework>("defaults.framework", raw)?,
            None => return Err(CliError::MissingFramework),
        },
    };

    let mut builder = ExportConfig::builder()
        .framework(framework)
        .accessibility(!args.no_accessibility && defaults.accessibility)
        .seo(!args.no_seo && defaults.seo)
        .performance(!args.no_performance && defaults.performance);

    if args.typescript {
        builder = builder.typescript(true);
    } else if let Some(typescript) = defaults.typescript {
        builder = builder.typescript(typescript);
    }

    let styling = match (args.styling, &defaults.styling) {
        (Some(s), _) => Some(Styling::from(s)),
        (None, Some(raw)) => Some(parse_default::<Styling>("defaults.styling", raw)?),
        (None, None) => None,
    };
    if let Some(styling) = styling {
        builder = builder.styling(styling);
    }

    let bundler = match (args.bundler, &defaults.bundler) {
        (Some(b), _) => Some(Bundler::from(b)),
        (None, Some(raw)) => Some(parse_default::<Bundler>("defaults.bundler", raw)?),
        (None, None) => None,
    };
    if let Some(bundler) = bundler {
        builder = builder.bundler(bundler);
    }

    let testing = match (args.testing, &defaults.testing) {
        (Some(t), _) => Some(Testing::from(t)),
        (None, Some(raw)) => Some(parse_default::<Testing>("defaults.testing", raw)?),
        (None, None) => None,
    };
    builder = builder.testing(testing);

    if let Some(name) = project_name {
        builder = builder.project_name(name);
    }

    builder.build().map_err(|e| CliError::Core(e.into()))
}

/// Parse a config-file default with the core parser.
fn parse_default<T>(key: &str, raw: &str) -> CliResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| CliError::ConfigError {
        message: format!("{key} = '{raw}': {e}"),
        source: Some(Box::new(e)),
    })
}
