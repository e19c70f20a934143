//! Configuration management for the documentation menu.
//!
//! Parses `pgn.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `package.url`
//! - `package.badge_url`

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use pgn_nav::{ThemeOption, ThemeSelector};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override analytics enabled flag.
    pub analytics_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pgn.toml";

/// Default content directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "src/pages";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Theme switcher configuration.
    pub theme: ThemeConfig,
    /// Analytics configuration.
    pub analytics: AnalyticsConfig,
    /// Package link shown under the menu (optional section).
    pub package: Option<PackageConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding the content pages.
    pub source_dir: PathBuf,
}

/// Theme switcher configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Initially selected theme id (defaults to the first option).
    pub default: Option<String>,
    /// Selectable themes in display order.
    pub options: Vec<ThemeOption>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: None,
            options: vec![
                ThemeOption::new("openedx", "Open edX"),
                ThemeOption::new("edxorg", "edX.org"),
            ],
        }
    }
}

impl ThemeConfig {
    /// Theme id the session starts with.
    #[must_use]
    pub fn initial(&self) -> &str {
        self.default
            .as_deref()
            .or_else(|| self.options.first().map(|o| o.id.as_str()))
            .unwrap_or_default()
    }
}

/// Analytics configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Whether tracking events are forwarded.
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Package link configuration.
#[derive(Debug, Deserialize)]
pub struct PackageConfig {
    /// Package name used as link title.
    pub name: String,
    /// Package registry page.
    pub url: String,
    /// Version badge image.
    pub badge_url: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`package.url`").
        field: String,
        /// Error message (e.g., "${`PACKAGE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
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
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pgn.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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

    /// Session theme context initialised from the configured default.
    #[must_use]
    pub fn theme_selector(&self) -> ThemeSelector {
        ThemeSelector::new(self.theme.options.clone(), self.theme.initial())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(enabled) = settings.analytics_enabled {
            self.analytics.enabled = enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            theme: ThemeConfig::default(),
            analytics: AnalyticsConfig::default(),
            package: None,
            docs_resolved: DocsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_theme()?;
        self.validate_package()?;
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        if self.theme.options.is_empty() {
            return Err(ConfigError::Validation(
                "theme.options must list at least one theme".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for option in &self.theme.options {
            require_non_empty(&option.id, "theme.options.id")?;
            require_non_empty(&option.label, "theme.options.label")?;
            if !seen.insert(option.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate theme id: {}",
                    option.id
                )));
            }
        }

        if let Some(default) = &self.theme.default
            && !seen.contains(default.as_str())
        {
            return Err(ConfigError::Validation(format!(
                "theme.default '{default}' is not one of theme.options"
            )));
        }

        Ok(())
    }

    fn validate_package(&self) -> Result<(), ConfigError> {
        let Some(package) = &self.package else {
            return Ok(());
        };
        require_non_empty(&package.name, "package.name")?;
        require_http_url(&package.url, "package.url")?;
        if let Some(badge_url) = &package.badge_url {
            require_http_url(badge_url, "package.badge_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }

        if let Some(ref mut package) = self.package {
            package.url = expand::expand_env(&package.url, "package.url")?;
            if let Some(ref badge_url) = package.badge_url {
                package.badge_url = Some(expand::expand_env(badge_url, "package.badge_url")?);
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self.docs.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR);
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}
