use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::requirements::config::DEFAULT_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "djdeploy")]
#[command(about = "Deployment assistant for Django projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the packages a requirements file declares, following -r includes
    Requirements {
        /// Path to the requirements file
        #[arg(value_name = "FILE", default_value = DEFAULT_FILE_NAME)]
        path: PathBuf,

        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the name of the Django project in a directory
    ProjectName {
        /// Django project directory (containing manage.py)
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },

    /// Print the settings file a deployment of the project would use
    Settings {
        /// Django project directory (containing manage.py)
        #[arg(value_name = "DIR")]
        path: PathBuf,
    },
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Requirements { .. } => Ok(()),
            Command::ProjectName { path } | Command::Settings { path } => validate_project_dir(path),
        }
    }
}

impl Command {
    /// Command line as the user would type it, for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::Requirements { .. } => "djdeploy requirements",
            Command::ProjectName { .. } => "djdeploy project-name",
            Command::Settings { .. } => "djdeploy settings",
        }
    }
}

/// Resolves `path` against the current directory when relative.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    Ok(cwd.join(path))
}

pub fn validate_project_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    std::fs::metadata(path).with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}
