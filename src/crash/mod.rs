//! Crash handling
//!
//! Internal failures of a command are turned into a bug report that the user
//! can file on the issue tracker. Failures caused by the user's own project
//! are handed back untouched.

pub mod browser;
pub mod config;
pub mod console;
pub mod probe;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::error::{IoError, Result};

pub use browser::{Browser, SystemBrowser};
pub use console::{Console, TerminalConsole};
pub use report::{issue_title, issue_url, render_issue_body, TemplateContext};

use config::{FILE_BUG_PROMPT, REPORT_FILE_PREFIX};

/// Why a command failed.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Caused by the user's project or input; shown as-is, never reported.
    #[error(transparent)]
    UserCode(anyhow::Error),

    /// A defect in djdeploy itself.
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl CommandError {
    pub fn kind_name(&self) -> &'static str {
        match self {
            CommandError::UserCode(_) => "UserCodeError",
            CommandError::Internal(_) => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashOutcome {
    pub report_path: PathBuf,
    pub filed: bool,
}

/// Handles a failed `command`.
///
/// User-code errors are returned as the error of this call. Internal errors
/// are written to a report file, and the user is asked whether to file a bug
/// through `browser`.
pub fn handle_crash(
    err: CommandError,
    command: &str,
    console: &dyn Console,
    browser: &dyn Browser,
) -> anyhow::Result<CrashOutcome> {
    let kind = err.kind_name();
    let error = match err {
        CommandError::UserCode(cause) => return Err(cause),
        CommandError::Internal(error) => error,
    };

    let body = render_issue_body(&TemplateContext::for_crash(command, &error));
    let title = issue_title(kind, &error, command);
    let report_path = write_report(&body)?;
    info!("Wrote crash report to {}", report_path.display());

    console.tell(&format!(
        "Your \"{command}\" failed due to an internal error.\n\n\
         You can report this error by filing a bug on GitHub. If you agree,\n\
         a browser window will open and a GitHub issue will be\n\
         pre-populated with the details of this crash.\n\
         For more details, see: {}",
        report_path.display()
    ));

    let filed = confirm_file_bug(console);
    if filed {
        browser.open(&issue_url(&title, &body)?);
    }

    Ok(CrashOutcome { report_path, filed })
}

fn confirm_file_bug(console: &dyn Console) -> bool {
    loop {
        let answer = match console.ask(FILE_BUG_PROMPT) {
            Ok(answer) => answer.trim().to_lowercase(),
            Err(e) => {
                debug!("No answer to bug prompt: {e}");
                return false;
            }
        };

        match answer.as_str() {
            "" | "n" => return false,
            "y" => return true,
            _ => {}
        }
    }
}

fn write_report(body: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(REPORT_FILE_PREFIX)
        .tempfile()
        .map_err(IoError::temp_file)?;

    file.write_all(body.as_bytes())
        .map_err(|e| IoError::write_error(file.path(), e))?;

    let (_, path) = file.keep().map_err(|e| IoError::temp_file(e.error))?;
    Ok(path)
}
