// ABOUTME: Object storage trait for artifact uploads.
// ABOUTME: Put a local file into a bucket under a key.

use async_trait::async_trait;
use std::path::Path;

use super::shared_types::{CodeLocation, UploadReceipt};

/// Artifact upload into object storage.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Upload the file at `artifact` to `location`.
    ///
    /// The caller has already checked that the file exists.
    async fn upload(
        &self,
        artifact: &Path,
        location: &CodeLocation,
    ) -> Result<UploadReceipt, UploadError>;
}

/// Errors from the upload step.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("artifact not found: {0}")]
    ArtifactMissing(String),

    #[error("artifact is not a regular file: {0}")]
    NotAFile(String),

    #[error("failed to read artifact {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    #[error("permission denied uploading to bucket {bucket}: {message}")]
    PermissionDenied { bucket: String, message: String },

    #[error("upload rejected: {0}")]
    Rejected(String),
}
