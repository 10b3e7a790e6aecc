//! `folio build` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_site::{BuildConfig, ContentSource, FsSource, Site, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Content directory with site.yaml (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Keep existing files in the output directory.
    #[arg(long)]
    no_clean: bool,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            clean: self.no_clean.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.path("Source", &config.site.source_dir);
        output.path("Output", &config.site.output_dir);

        let source = FsSource::new(&config.site.source_dir);
        let site = Site::load(&source)?;
        for lint in site.lints() {
            output.lint(lint);
        }

        let builder = StaticSiteBuilder::new(BuildConfig {
            output_dir: config.site.output_dir.clone(),
            source_dir: Some(config.site.source_dir.clone()),
            clean: config.site.clean,
            render: super::render_options(&config),
        });
        let report = builder.build(&site, source.public_dir().as_deref())?;

        output.built(&report, &config.site.output_dir);
        Ok(())
    }
}
