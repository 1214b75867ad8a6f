use std::io;

use dialoguer::Input;

/// User-facing I/O for interactive flows.
pub trait Console {
    fn tell(&self, message: &str);

    /// Blocks until the user answers `prompt`.
    fn ask(&self, prompt: &str) -> io::Result<String>;
}

/// Console on the process's terminal: messages to stderr, answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn tell(&self, message: &str) {
        eprintln!("{message}");
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(bare_prompt(prompt))
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }
}

/// The theme appends its own `": "` separator.
fn bare_prompt(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':').trim_end()
}
