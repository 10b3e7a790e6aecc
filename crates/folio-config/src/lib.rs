//! Configuration management for Folio.
//!
//! Parses `folio.toml` with serde and provides auto-discovery of the config
//! file in the current directory and its parents.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `cta.href` supports `${VAR}` and `${VAR:-default}`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Override the wipe-before-build flag.
    pub clean: Option<bool>,
}

const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    content: ContentConfigRaw,
    build: BuildConfigRaw,
    /// Call-to-action slider target.
    pub cta: CtaConfig,
    /// Decorative shape layout.
    pub shapes: ShapesConfig,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub site: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
    clean: Option<bool>,
}

/// Resolved input and output locations.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Holds `site.yaml`, `case-studies/` and `public/`.
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Remove `output_dir` before writing.
    pub clean: bool,
}

/// Where the CTA slider leads.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CtaConfig {
    /// External link opened when the slider is released past `threshold`.
    /// Unset keeps the slider on the contact anchor.
    pub href: Option<String>,
    pub threshold: f64,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            href: None,
            threshold: 0.9,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShapesConfig {
    /// Mixed into every scene's scatter. Changing it reshuffles the layout.
    pub seed: u64,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    #[error("Environment variable error in {field}: {message}")]
    EnvVar { field: String, message: String },
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `folio.toml` in the current directory and parents, falling back to
    /// defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site.output_dir.clone_from(output_dir);
        }
        if let Some(clean) = settings.clean {
            self.site.clean = clean;
        }
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(current)
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            build: BuildConfigRaw::default(),
            cta: CtaConfig::default(),
            shapes: ShapesConfig::default(),
            site: SiteConfig {
                source_dir: base.join("content"),
                output_dir: base.join("dist"),
                clean: true,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `cta.href` is not an http(s) URL
    /// or `cta.threshold` is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(href) = &self.cta.href {
            require_http_url(href, "cta.href")?;
        }
        let threshold = self.cta.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "cta.threshold must be in (0, 1], got {threshold}"
            )));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(href) = &self.cta.href {
            self.cta.href = Some(expand::expand_env(href, "cta.href")?);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site = SiteConfig {
            source_dir: resolve(self.content.source_dir.as_deref(), "content"),
            output_dir: resolve(self.build.output_dir.as_deref(), "dist"),
            clean: self.build.clean.unwrap_or(true),
        };
    }
}

fn discover_from(mut current: PathBuf) -> Option<PathBuf> {
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
