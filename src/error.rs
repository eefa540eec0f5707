use std::fmt;

use thiserror::Error;

/// Errors raised while building a command template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error(
        "Template arity mismatch: {segments} segments for {args} arguments (expected {expected})",
        expected = .args + 1
    )]
    Arity { segments: usize, args: usize },
}

/// How the child process ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitInfo {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {}", code),
            (None, Some(sig)) => write!(f, "signal {}", sig),
            (None, None) => write!(f, "unknown status"),
        }
    }
}

/// A command that ran and did not succeed.
///
/// `message` has the captured stderr removed from its tail, since the raw
/// streams are carried separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecFailure {
    pub command: String,
    pub message: String,
    pub exit: ExitInfo,
    pub stdout: String,
    pub stderr: String,
}

impl fmt::Display for ExecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.exit)
    }
}

impl std::error::Error for ExecFailure {}

/// Output of a successful command could not be turned into the requested shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Failed(#[from] ExecFailure),
    #[error("Failed to spawn shell {shell}: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ExecError {
    /// Exit code reported by the child, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::Failed(f) => f.exit.code,
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ExecFailure> {
        match self {
            ExecError::Failed(f) => Some(f),
            _ => None,
        }
    }
}
