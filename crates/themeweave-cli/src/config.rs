//! CLI configuration loaded from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Without `--config`, `<config dir>/themeweave/config.toml` is read
//! when it exists.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use themeweave_common::ThemeweaveError;
use themeweave_css::{AllThemesOptions, CssOptions, DEFAULT_ATTRIBUTE, DEFAULT_SELECTOR};
use themeweave_resolver::options::{DEFAULT_MAX_SIZE, DEFAULT_TTL};
use themeweave_resolver::CacheOptions;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub css: CssConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    pub prefix: Option<String>,
    pub separator: String,
    /// Selector used when rendering a single theme.
    pub selector: String,
    /// Attribute used in per-theme selectors.
    pub attribute: String,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: "-".into(),
            selector: DEFAULT_SELECTOR.into(),
            attribute: DEFAULT_ATTRIBUTE.into(),
        }
    }
}

impl CssConfig {
    pub fn css_options(&self) -> CssOptions {
        CssOptions {
            prefix: self.prefix.clone(),
            separator: self.separator.clone(),
        }
    }

    pub fn all_themes_options(&self, default_theme: Option<String>) -> AllThemesOptions {
        AllThemesOptions {
            css: self.css_options(),
            default_theme,
            attribute: self.attribute.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub max_size: usize,
    pub stale_while_revalidate: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL.as_secs(),
            max_size: DEFAULT_MAX_SIZE,
            stale_while_revalidate: true,
        }
    }
}

impl CacheConfig {
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::default()
            .with_ttl(Duration::from_secs(self.ttl_secs))
            .with_max_size(self.max_size)
            .with_stale_while_revalidate(self.stale_while_revalidate)
    }
}

/// Platform config path: `~/.config/themeweave/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("themeweave").join("config.toml"))
}

pub fn load_from_path(path: &Path) -> Result<CliConfig, ThemeweaveError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ThemeweaveError::Parse(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: CliConfig = toml::from_str(&content)
        .map_err(|e| ThemeweaveError::Parse(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit config file, or the platform default if present.
///
/// An explicit path must exist; a missing default file means defaults.
pub fn load(explicit: Option<&Path>) -> Result<CliConfig, ThemeweaveError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(CliConfig::default()),
    }
}
