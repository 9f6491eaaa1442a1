//! themeweave: command-line front end for schema validation, CSS output and
//! cached theme resolution.

mod cli;
mod commands;
mod config;
mod files;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG: &str = "themeweave=info";

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so stdout stays pipeable CSS/JSON.
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG);
    let mut filter = EnvFilter::from_default_env();
    match directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG.parse::<Directive>())
    {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("ignoring log level '{directive}': {e}"),
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match commands::run(args.command, &config, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
