//! Schema and theme documents on disk.
//!
//! Documents may be JSON, YAML or TOML; the format is picked from the file
//! extension.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use themeweave_common::{FetchError, ThemeweaveError};
use themeweave_resolver::ThemeFetcher;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Extensions tried, in order, when looking up a theme by id.
    pub const EXTENSIONS: [&'static str; 4] = ["json", "yaml", "yml", "toml"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

pub fn parse_document(content: &str, format: Format) -> Result<Value, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

fn format_for(path: &Path) -> Result<Format, ThemeweaveError> {
    Format::from_path(path).ok_or_else(|| {
        ThemeweaveError::Parse(format!(
            "unsupported file type {} (expected .json, .yaml, .yml or .toml)",
            path.display()
        ))
    })
}

/// Read and parse a document.
pub fn load_document(path: &Path) -> Result<Value, ThemeweaveError> {
    let format = format_for(path)?;
    let content = std::fs::read_to_string(path)?;
    let value = parse_document(&content, format)
        .map_err(|e| ThemeweaveError::Parse(format!("{}: {e}", path.display())))?;
    debug!("loaded document from {}", path.display());
    Ok(value)
}

/// Fetches themes from `<dir>/<id>.<ext>` files.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Theme ids are file stems; anything that could leave the directory is
    /// refused.
    fn check_id(theme_id: &str) -> Result<(), FetchError> {
        if theme_id.is_empty()
            || theme_id.starts_with('.')
            || theme_id.contains(['/', '\\'])
        {
            return Err(format!("invalid theme id '{theme_id}'").into());
        }
        Ok(())
    }
}

#[async_trait]
impl ThemeFetcher for DirFetcher {
    async fn fetch(&self, theme_id: &str) -> Result<Value, FetchError> {
        Self::check_id(theme_id)?;

        for ext in Format::EXTENSIONS {
            let path = self.dir.join(format!("{theme_id}.{ext}"));
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let format = Format::from_extension(ext)
                .ok_or_else(|| format!("unsupported extension '{ext}'"))?;
            debug!(theme_id, path = %path.display(), "reading theme file");
            return parse_document(&content, format)
                .map_err(|e| format!("{}: {e}", path.display()).into());
        }

        Err(format!("no theme file for '{theme_id}' in {}", self.dir.display()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/theme.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("theme.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("theme.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("theme.txt")), None);
        assert_eq!(Format::from_path(Path::new("theme")), None);
    }

    #[test]
    fn all_formats_parse_to_the_same_value() {
        let expected = json!({ "colors": { "primary": "#fff" }, "radius": 4 });
        let json = r##"{ "colors": { "primary": "#fff" }, "radius": 4 }"##;
        let yaml = "colors:\n  primary: \"#fff\"\nradius: 4\n";
        let toml = "radius = 4\n\n[colors]\nprimary = \"#fff\"\n";

        assert_eq!(parse_document(json, Format::Json).unwrap(), expected);
        assert_eq!(parse_document(yaml, Format::Yaml).unwrap(), expected);
        assert_eq!(parse_document(toml, Format::Toml).unwrap(), expected);
    }

    #[test]
    fn load_document_reports_bad_input() {
        let dir = tempfile::tempdir().unwrap();

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(load_document(&bad), Err(ThemeweaveError::Parse(_))));

        let unknown = dir.path().join("theme.ini");
        std::fs::write(&unknown, "x=1").unwrap();
        assert!(matches!(load_document(&unknown), Err(ThemeweaveError::Parse(_))));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(load_document(&missing), Err(ThemeweaveError::Io(_))));
    }

    #[tokio::test]
    async fn dir_fetcher_reads_any_supported_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("light.yaml"), "accent: teal\n").unwrap();
        std::fs::write(dir.path().join("dark.toml"), "accent = \"navy\"\n").unwrap();

        let fetcher = DirFetcher::new(dir.path());
        assert_eq!(fetcher.fetch("light").await.unwrap(), json!({ "accent": "teal" }));
        assert_eq!(fetcher.fetch("dark").await.unwrap(), json!({ "accent": "navy" }));

        let err = fetcher.fetch("missing").await.unwrap_err();
        assert!(err.to_string().starts_with("no theme file for 'missing'"));
    }

    #[tokio::test]
    async fn dir_fetcher_refuses_paths_outside_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path());
        for id in ["../secret", "a/b", "..", ".hidden", ""] {
            let err = fetcher.fetch(id).await.unwrap_err();
            assert!(err.to_string().starts_with("invalid theme id"), "{id}");
        }
    }
}
