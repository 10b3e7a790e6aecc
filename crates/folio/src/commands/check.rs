//! `folio check` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_site::{FsSource, Site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Content directory with site.yaml (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Fails with [`CliError::Lints`] when anything is reported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let site = Site::load(&FsSource::new(&config.site.source_dir))?;
        output.heading(&format!(
            "{} case studies in {}",
            site.case_studies().len(),
            config.site.source_dir.display()
        ));

        let lints = site.lints();
        if lints.is_empty() {
            output.success("No problems found");
            return Ok(());
        }
        for lint in lints {
            output.lint(lint);
        }
        Err(CliError::Lints(lints.len()))
    }
}
