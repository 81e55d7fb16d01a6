use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, std::process::ExitStatus),
}

/// Feed `input` to a shell command's stdin and wait for it to finish.
///
/// The command's own stdout/stderr are discarded — the callers here are
/// sinks (clipboard writers), not filters. If `timeout` elapses before the
/// command exits, the process is killed and an error is returned.
pub fn feed(command_str: &str, input: &str, timeout: Duration) -> Result<(), ShellError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    };

    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = cmd.spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    // stdin is dropped here so the command sees EOF.

    match child.wait_timeout(timeout)? {
        Some(status) => {
            if !status.success() {
                return Err(ShellError::CommandFailed(command_str.to_string(), status));
            }
        }
        None => {
            child.kill()?;
            return Err(ShellError::Timeout(command_str.to_string(), timeout));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_sink_command() {
        let cmd = if cfg!(windows) { "findstr x" } else { "cat" };
        feed(cmd, "hello\n", Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn failing_command_reports_status() {
        let res = feed("exit 3", "", Duration::from_secs(5));
        match res {
            Err(ShellError::CommandFailed(cmd, _)) => assert_eq!(cmd, "exit 3"),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn slow_command_times_out_and_is_killed() {
        let cmd = if cfg!(windows) {
            "ping -n 3 127.0.0.1"
        } else {
            "sleep 2"
        };
        let start = std::time::Instant::now();
        let res = feed(cmd, "", Duration::from_millis(300));
        assert!(matches!(res, Err(ShellError::Timeout(_, _))));
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
