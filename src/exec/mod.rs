//! Run an assembled command through the shell and parse what it prints.

use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{ExecError, ExecFailure, ExitInfo, ParseError};
use crate::shell::Shell;
use crate::tmpl::Template;

/// Run `tpl` with the shell named by `$SHELL`.
pub async fn run_with<T, F>(tpl: &Template, parse: F) -> Result<T, ExecError>
where
    F: FnOnce(String) -> Result<T, ParseError>,
{
    Shell::from_env().run(tpl, parse).await
}

impl Shell {
    /// Spawn `<shell> -c <command>`, wait for it, and parse stdout.
    ///
    /// A non-zero exit or a terminating signal yields [`ExecError::Failed`]
    /// carrying both raw streams. stderr on success is only logged.
    pub async fn run<T, F>(&self, tpl: &Template, parse: F) -> Result<T, ExecError>
    where
        F: FnOnce(String) -> Result<T, ParseError>,
    {
        let command = self.escape(tpl);
        info!(shell = %self.path(), command = %command, "running");

        let started = Instant::now();
        let output = Command::new(self.path())
            .arg("-c")
            .arg(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecError::Spawn { shell: self.path().to_string(), source })?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(elapsed_ms, "command finished");

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            if !stdout.is_empty() { warn!(stdout = %stdout, "command stdout"); }
            let trimmed = stderr.trim();
            if !trimmed.is_empty() { warn!(stderr = %trimmed, "command stderr"); }

            let raw = format!("Command failed: {}\n{}", command, stderr);
            return Err(ExecError::Failed(ExecFailure {
                message: adjust_message(&raw, &stderr),
                exit: exit_info(output.status),
                command,
                stdout,
                stderr,
            }));
        }

        if !stderr.is_empty() { info!(stderr = %stderr.trim_end(), "command stderr"); }
        Ok(parse(stdout)?)
    }
}

/// Drop `stderr` from the end of `raw` if it was appended there, then right-trim.
pub fn adjust_message(raw: &str, stderr: &str) -> String {
    let body = if stderr.is_empty() { raw } else { raw.strip_suffix(stderr).unwrap_or(raw) };
    body.trim_end().to_string()
}

fn exit_info(status: ExitStatus) -> ExitInfo {
    ExitInfo { code: status.code(), signal: signal_of(status) }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> { None }
