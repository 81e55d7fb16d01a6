//! Clipboard piping for rendered snippets.
//!
//! Copying the exported fragment is the last step of the paste workflow, so
//! it gets a dedicated, dependency-light crate: shell out to the platform
//! clipboard command, feed the fragment to its stdin, and bound the wait
//! with a timeout so a wedged helper can never hang the CLI.
//!
//! # Platform Support
//!
//! - **macOS**: `pbcopy`
//! - **Linux**: `xclip -selection clipboard` (X11)
//! - **Other**: [`copy_to_clipboard`] reports [`ClipboardError::Unsupported`]
//!
//! # Example
//!
//! ```rust,ignore
//! inkpaste_pipe::copy_to_clipboard("<pre style=\"padding:1rem\">hi</pre>")?;
//! ```

use std::time::Duration;

use thiserror::Error;

mod shell;

pub use shell::ShellError;

/// How long the clipboard helper may take before being killed.
const CLIPBOARD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available on this platform")]
    Unsupported,
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// The platform clipboard command, if one exists.
#[cfg(target_os = "macos")]
fn clipboard_command() -> Option<&'static str> {
    Some("pbcopy")
}

/// The platform clipboard command, if one exists.
#[cfg(target_os = "linux")]
fn clipboard_command() -> Option<&'static str> {
    Some("xclip -selection clipboard")
}

/// The platform clipboard command, if one exists.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn clipboard_command() -> Option<&'static str> {
    None
}

/// Whether this platform has a known clipboard command.
pub fn clipboard_supported() -> bool {
    clipboard_command().is_some()
}

/// Puts `content` on the system clipboard.
///
/// # Errors
///
/// [`ClipboardError::Unsupported`] when the platform has no known clipboard
/// command, or [`ClipboardError::Shell`] when the command is missing, exits
/// non-zero, or exceeds the timeout.
pub fn copy_to_clipboard(content: &str) -> Result<(), ClipboardError> {
    let command = clipboard_command().ok_or(ClipboardError::Unsupported)?;
    shell::feed(command, content, CLIPBOARD_TIMEOUT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_matches_platform() {
        let expected = cfg!(any(target_os = "macos", target_os = "linux"));
        assert_eq!(clipboard_supported(), expected);
    }

    #[cfg(any(target_os = "macos", target_os = "linux"))]
    #[test]
    fn clipboard_command_is_a_sink() {
        // Not executed — clipboard helpers are absent on CI — but the
        // configured command must at least be non-empty shell text.
        let cmd = clipboard_command().unwrap();
        assert!(!cmd.trim().is_empty());
    }
}
