use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Opens URLs for the user.
pub trait Browser {
    /// Fire-and-forget: failures are logged, never returned.
    fn open(&self, url: &str);
}

/// The user's default browser, launched through the platform opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) {
        let mut command = opener_command(url);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match command.spawn() {
            Ok(_) => debug!("Opened browser for {url}"),
            Err(e) => warn!("Failed to open browser: {e}. Visit {url} to file the issue."),
        }
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(url);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
