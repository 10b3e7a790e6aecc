//! CLI error types.

use folio_config::ConfigError;
use folio_site::{BuildError, SiteError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0} content lint(s) found")]
    Lints(usize),
}
