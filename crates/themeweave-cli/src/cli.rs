use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use themeweave_schema::ValidationMode;

/// themeweave: validate design-token themes and render them as CSS variables.
#[derive(Parser, Debug)]
#[command(name = "themeweave", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every token path in a schema with its kind.
    Paths {
        #[arg(long)]
        schema: PathBuf,
    },

    /// Validate a theme document against a schema.
    Validate {
        #[arg(long)]
        schema: PathBuf,

        #[arg(long)]
        theme: PathBuf,

        #[arg(long, value_enum, default_value_t = Mode::Strict)]
        mode: Mode,
    },

    /// Render one or more themes as CSS custom properties.
    Css {
        #[arg(long)]
        schema: PathBuf,

        /// Theme as NAME=FILE. Repeat for a multi-theme stylesheet.
        #[arg(long = "theme", value_parser = parse_named_theme, required = true)]
        themes: Vec<(String, PathBuf)>,

        /// Theme that also applies to `:root`.
        #[arg(long)]
        default: Option<String>,

        /// Selector for single-theme output.
        #[arg(long)]
        selector: Option<String>,
    },

    /// Resolve theme ids from a directory through the cached resolver.
    Resolve {
        #[arg(long)]
        schema: PathBuf,

        /// Directory holding `<id>.json`, `<id>.yaml`, `<id>.yml` or `<id>.toml`.
        #[arg(long)]
        dir: PathBuf,

        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Strict,
    Partial,
    Coerce,
}

impl From<Mode> for ValidationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Strict => ValidationMode::Strict,
            Mode::Partial => ValidationMode::Partial,
            Mode::Coerce => ValidationMode::Coerce,
        }
    }
}

fn parse_named_theme(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FILE, got '{s}'"))?;
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=FILE, got '{s}'"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_takes_named_themes() {
        let args = Args::try_parse_from([
            "themeweave",
            "css",
            "--schema",
            "schema.json",
            "--theme",
            "light=themes/light.yaml",
            "--theme",
            "dark=themes/dark.toml",
            "--default",
            "light",
        ])
        .unwrap();

        let Command::Css { themes, default, .. } = args.command else {
            panic!("expected css command");
        };
        assert_eq!(
            themes,
            vec![
                ("light".to_string(), PathBuf::from("themes/light.yaml")),
                ("dark".to_string(), PathBuf::from("themes/dark.toml")),
            ]
        );
        assert_eq!(default.as_deref(), Some("light"));
    }

    #[test]
    fn unnamed_theme_is_rejected() {
        let result = Args::try_parse_from([
            "themeweave",
            "css",
            "--schema",
            "schema.json",
            "--theme",
            "light.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn validate_mode_defaults_to_strict() {
        let args = Args::try_parse_from([
            "themeweave",
            "validate",
            "--schema",
            "s.json",
            "--theme",
            "t.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            args.command,
            Command::Validate { mode: Mode::Strict, .. }
        ));
    }
}
