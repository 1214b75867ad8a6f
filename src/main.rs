use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use serde::Serialize;

use djdeploy::cli::{self, Args, Command, OutputFormat};
use djdeploy::crash::{self, CommandError, SystemBrowser, TerminalConsole};
use djdeploy::logging::{self, Verbosity};
use djdeploy::{requirements, skeleton};

#[derive(Serialize)]
struct RequirementsOutput<'a> {
    requirements: Vec<&'a str>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))
        .context("Failed to initialise logging")?;
    args.validate().context("Invalid arguments")?;

    let command = args.command.display_name();
    match run(&args.command) {
        Ok(()) => Ok(()),
        Err(err) => {
            let outcome = crash::handle_crash(err, command, &TerminalConsole, &SystemBrowser)?;
            tracing::debug!(
                "Crash report at {} (filed: {})",
                outcome.report_path.display(),
                outcome.filed
            );
            std::process::exit(1);
        }
    }
}

fn run(command: &Command) -> Result<(), CommandError> {
    match command {
        Command::Requirements { path, format } => {
            let path = cli::absolute_path(path).map_err(CommandError::Internal)?;
            if !path.exists() {
                tracing::warn!("Requirements file not found: {}", path.display());
            }
            let set = requirements::resolve(&path);
            print_requirements(&set, *format).map_err(CommandError::Internal)
        }
        Command::ProjectName { path } => {
            let name = skeleton::project_name(path)
                .with_context(|| format!("Cannot determine project name in {}", path.display()))
                .map_err(CommandError::UserCode)?;
            println!("{name}");
            Ok(())
        }
        Command::Settings { path } => match skeleton::guess_settings_path(path) {
            Some(settings) => {
                println!("{}", settings.display());
                Ok(())
            }
            None => Err(CommandError::UserCode(anyhow::anyhow!(
                "No settings file found for the Django project in {}",
                path.display()
            ))),
        },
    }
}

fn print_requirements(set: &requirements::RequirementSet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for name in set {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let output = RequirementsOutput {
                requirements: set.iter().map(String::as_str).collect(),
            };
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialize requirements")?;
            println!("{json}");
        }
    }
    Ok(())
}
