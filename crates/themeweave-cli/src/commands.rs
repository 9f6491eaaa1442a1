//! Subcommand implementations.
//!
//! Each command writes its report to `out` and returns whether it succeeded;
//! hard failures (unreadable files, bad schemas) are returned as errors.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use themeweave_common::ThemeweaveError;
use themeweave_css::{to_css_string, to_css_string_all};
use themeweave_resolver::Resolver;
use themeweave_schema::{validate, validate_with_mode, Schema, Theme, ValidationMode};
use tracing::{info, warn};

use crate::cli::Command;
use crate::config::CliConfig;
use crate::files::{load_document, DirFetcher};

pub async fn run(
    command: Command,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<bool, ThemeweaveError> {
    match command {
        Command::Paths { schema } => paths(&schema, out),
        Command::Validate {
            schema,
            theme,
            mode,
        } => validate_theme(&schema, &theme, mode.into(), out),
        Command::Css {
            schema,
            themes,
            default,
            selector,
        } => css(&schema, &themes, default, selector.as_deref(), config, out),
        Command::Resolve { schema, dir, ids } => resolve(&schema, dir, ids, config, out).await,
    }
}

fn load_schema(path: &Path) -> Result<Schema, ThemeweaveError> {
    let document = load_document(path)?;
    Ok(Schema::from_value(&document)?)
}

fn paths(schema: &Path, out: &mut dyn Write) -> Result<bool, ThemeweaveError> {
    let schema = load_schema(schema)?;
    for (path, token) in schema.tokens() {
        match token.description() {
            Some(description) => writeln!(out, "{path}\t{}\t{description}", token.kind())?,
            None => writeln!(out, "{path}\t{}", token.kind())?,
        }
    }
    Ok(true)
}

fn validate_theme(
    schema: &Path,
    theme: &Path,
    mode: ValidationMode,
    out: &mut dyn Write,
) -> Result<bool, ThemeweaveError> {
    let schema = load_schema(schema)?;
    let input = load_document(theme)?;

    match validate_with_mode(&schema, &input, mode) {
        Ok(theme) => {
            let json = serde_json::to_string_pretty(&theme)
                .map_err(|e| ThemeweaveError::Other(e.to_string()))?;
            writeln!(out, "{json}")?;
            Ok(true)
        }
        Err(errors) => {
            for error in errors.iter() {
                writeln!(out, "{error}")?;
            }
            warn!(errors = errors.len(), "theme is invalid");
            Ok(false)
        }
    }
}

fn css(
    schema: &Path,
    themes: &[(String, PathBuf)],
    default: Option<String>,
    selector: Option<&str>,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<bool, ThemeweaveError> {
    let schema = load_schema(schema)?;

    let mut loaded: IndexMap<String, Theme> = IndexMap::with_capacity(themes.len());
    for (name, path) in themes {
        let input = load_document(path)?;
        let theme = validate(&schema, &input).map_err(|errors| ThemeweaveError::Validation {
            theme: name.clone(),
            errors,
        })?;
        loaded.insert(name.clone(), theme);
    }

    let css = match loaded.first() {
        Some((_, theme)) if loaded.len() == 1 && default.is_none() => {
            let selector = selector.unwrap_or(&config.css.selector);
            to_css_string(&schema, theme, Some(selector), &config.css.css_options())
        }
        _ => to_css_string_all(&schema, &loaded, &config.css.all_themes_options(default)),
    };

    writeln!(out, "{css}")?;
    Ok(true)
}

async fn resolve(
    schema: &Path,
    dir: PathBuf,
    ids: Vec<String>,
    config: &CliConfig,
    out: &mut dyn Write,
) -> Result<bool, ThemeweaveError> {
    let schema = load_schema(schema)?;
    let resolver =
        Resolver::with_options(schema, DirFetcher::new(dir), config.cache.cache_options());
    let options = config.css.css_options();

    let mut ok = true;
    for (id, result) in resolver.prefetch(ids).await {
        match result {
            Ok(theme) => {
                let selector = format!("[{}=\"{id}\"]", config.css.attribute);
                let css = to_css_string(resolver.schema(), &theme, Some(&selector), &options);
                writeln!(out, "{css}")?;
            }
            Err(e) => {
                warn!(theme_id = %id, error = %e, "theme could not be resolved");
                writeln!(out, "/* {} */", comment_text(&format!("{id}: {e}")))?;
                ok = false;
            }
        }
    }

    info!(cached = resolver.len(), "resolve finished");
    Ok(ok)
}

/// Text safe to place inside a CSS comment.
fn comment_text(text: &str) -> String {
    text.replace("*/", "* /")
}
