// ABOUTME: Runs the compile and packaging commands as external processes.
// ABOUTME: A non-zero exit status aborts the plan before anything is uploaded.

mod command;
mod error;

pub use command::BuildCommand;
pub use command::BuildPlan;
pub(crate) use command::CommandEntry;
pub use error::BuildError;

use snafu::ResultExt;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::output::Output;

/// Executes build commands in a project directory.
pub struct BuildRunner {
    project_dir: PathBuf,
}

impl BuildRunner {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
        }
    }

    /// Run a single command, inheriting stdio so build output reaches the user.
    pub async fn run_step(&self, command: &BuildCommand) -> Result<(), BuildError> {
        let line = command.to_string();
        tracing::info!(command = %line, dir = %self.project_dir.display(), "running build command");

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(&self.project_dir)
            .status()
            .await
            .context(error::SpawnSnafu {
                command: line.clone(),
            })?;

        match status.code() {
            Some(0) => {
                tracing::debug!(command = %line, "build command succeeded");
                Ok(())
            }
            Some(code) => {
                tracing::warn!(command = %line, code, "build command failed");
                Err(BuildError::Failed { command: line, code })
            }
            None => Err(BuildError::Terminated { command: line }),
        }
    }

    /// Run every step in order, stopping at the first failure.
    pub async fn run_plan(&self, plan: &BuildPlan, output: &Output) -> Result<(), BuildError> {
        let total = plan.len();
        for (index, step) in plan.steps().enumerate() {
            output.progress(&format!("  → [{}/{total}] {step}", index + 1));
            self.run_step(step).await?;
        }
        Ok(())
    }
}
