// ABOUTME: Error types for deployment pipeline stages.
// ABOUTME: Wraps build, auth, upload, and update failures with a kind for exit-code mapping.

use crate::build::BuildError;
use crate::cloud::{AuthError, UpdateError, UploadError};

/// Errors that can occur during deployment state transitions.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Compile or packaging command failed.
    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    /// Credentials could not be resolved.
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Artifact could not be uploaded.
    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),

    /// Function could not be repointed at the new artifact.
    #[error("function update failed: {0}")]
    Update(#[from] UpdateError),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    Build,
    Auth,
    Upload,
    Update,
}

impl DeployError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::Build(_) => DeployErrorKind::Build,
            DeployError::Auth(_) => DeployErrorKind::Auth,
            DeployError::Upload(_) => DeployErrorKind::Upload,
            DeployError::Update(_) => DeployErrorKind::Update,
        }
    }
}
