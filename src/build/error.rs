// ABOUTME: Build step errors with SNAFU context selectors.
// ABOUTME: Each variant carries the command line that failed.

use snafu::Snafu;

/// Failure of a compile or packaging command.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BuildError {
    #[snafu(display("failed to start `{command}`: {source}"))]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[snafu(display("`{command}` exited with status {code}"))]
    Failed { command: String, code: i32 },

    #[snafu(display("`{command}` was terminated by a signal"))]
    Terminated { command: String },
}

impl BuildError {
    /// The command line that failed.
    pub fn command(&self) -> &str {
        match self {
            BuildError::Spawn { command, .. }
            | BuildError::Failed { command, .. }
            | BuildError::Terminated { command } => command,
        }
    }

    /// Exit code of the failed command, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BuildError::Failed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
