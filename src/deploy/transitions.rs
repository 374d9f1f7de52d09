// ABOUTME: State transition methods for deployment orchestration.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::io::ErrorKind;

use crate::build::BuildRunner;
use crate::cloud::{ArtifactStore, FunctionUpdater, UploadError};
use crate::diagnostics::{Diagnostics, WarningKind};
use crate::output::Output;

use super::Deployment;
use super::error::DeployError;
use super::report::DeployReport;
use super::request::BuildStage;
use super::state::{Built, Completed, Initialized, Uploaded};

// =============================================================================
// Initialized -> Built
// =============================================================================

impl Deployment<Initialized> {
    /// Run the build plan, or skip it if the request says so.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Build` on the first command that fails to start
    /// or exits non-zero. Nothing after it runs.
    pub async fn build(self, output: &Output) -> Result<Deployment<Built>, DeployError> {
        match &self.request.build {
            BuildStage::Run(plan) => {
                output.progress("  → Building artifact...");
                BuildRunner::new(&self.request.project_dir)
                    .run_plan(plan, output)
                    .await?;
                Ok(self.transition(Built))
            }
            BuildStage::Skip => Ok(self.skip_build(output)),
        }
    }

    /// Treat the artifact on disk as already built.
    pub fn skip_build(self, output: &Output) -> Deployment<Built> {
        output.progress("  → Skipping build");
        tracing::info!("build skipped");
        self.transition(Built)
    }
}

// =============================================================================
// Built -> Uploaded
// =============================================================================

impl Deployment<Built> {
    /// Upload the local artifact under the resolved key.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Upload` if the artifact is missing, is not a
    /// regular file, or the store rejects it. The store is not called for a
    /// missing artifact.
    pub async fn upload<S>(
        self,
        store: &S,
        output: &Output,
        diag: &mut Diagnostics,
    ) -> Result<Deployment<Uploaded>, DeployError>
    where
        S: ArtifactStore + ?Sized,
    {
        let path = self.request.artifact_path();
        let display = path.display().to_string();

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(UploadError::ArtifactMissing(display).into());
            }
            Err(e) => {
                return Err(UploadError::ReadFailed {
                    path: display,
                    message: e.to_string(),
                }
                .into());
            }
        };

        if !metadata.is_file() {
            return Err(UploadError::NotAFile(display).into());
        }

        if metadata.len() == 0 {
            diag.warn(
                WarningKind::EmptyArtifact,
                format!("artifact {display} is empty"),
            );
        }

        let file_name = path.file_name().and_then(|n| n.to_str());
        if file_name != Some(self.request.key.as_str()) {
            diag.warn(
                WarningKind::KeyMismatch,
                format!(
                    "object key '{}' differs from artifact file name '{}'",
                    self.request.key,
                    file_name.unwrap_or_default()
                ),
            );
        }

        if self.request.bucket.is_legacy() {
            diag.warn(
                WarningKind::LegacyBucketName,
                format!(
                    "bucket {} is not DNS compatible; only path-style requests can reach it",
                    self.request.bucket
                ),
            );
        }

        let location = self.request.code_location();
        output.progress(&format!("  → Uploading {display} to {location}..."));

        let receipt = store.upload(&path, &location).await?;
        tracing::info!(%location, size_bytes = receipt.size_bytes, "artifact uploaded");

        Ok(self.transition(Uploaded { receipt }))
    }
}

// =============================================================================
// Uploaded -> Completed
// =============================================================================

impl Deployment<Uploaded> {
    /// Point the function at the uploaded object.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Update` if the function does not exist or the
    /// service rejects the update. The uploaded object is left in place.
    pub async fn update_function<F>(
        self,
        functions: &F,
        output: &Output,
    ) -> Result<Deployment<Completed>, DeployError>
    where
        F: FunctionUpdater + ?Sized,
    {
        output.progress(&format!(
            "  → Updating function {} to {}...",
            self.request.function, self.state.receipt.location
        ));

        let update = functions
            .update_code(
                &self.request.function,
                &self.state.receipt.location,
                self.request.publish,
            )
            .await?;

        let Deployment { request, state } = self;
        Ok(Deployment {
            request,
            state: Completed {
                receipt: state.receipt,
                update,
            },
        })
    }
}

// =============================================================================
// Completed
// =============================================================================

impl Deployment<Completed> {
    /// Consume the deployment and produce its report.
    pub fn finish(self, diag: Diagnostics) -> DeployReport {
        let Deployment { request, state } = self;
        DeployReport::new(request.function, state.receipt, state.update, diag)
    }
}
