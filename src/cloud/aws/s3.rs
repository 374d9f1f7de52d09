// ABOUTME: S3-backed artifact store.
// ABOUTME: Streams the local file with PutObject and classifies service errors.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

use crate::cloud::traits::{ArtifactStore, CodeLocation, UploadError, UploadReceipt};

#[derive(Debug, Clone)]
pub struct S3ArtifactStore {
    client: aws_sdk_s3::Client,
}

impl S3ArtifactStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn upload(
        &self,
        artifact: &Path,
        location: &CodeLocation,
    ) -> Result<UploadReceipt, UploadError> {
        let read_failed = |message: String| UploadError::ReadFailed {
            path: artifact.display().to_string(),
            message,
        };

        let size_bytes = tokio::fs::metadata(artifact)
            .await
            .map_err(|e| read_failed(e.to_string()))?
            .len();
        let body = ByteStream::from_path(artifact)
            .await
            .map_err(|e| read_failed(e.to_string()))?;

        tracing::info!(
            bucket = %location.bucket,
            key = %location.key,
            size_bytes,
            "uploading artifact"
        );

        let output = self
            .client
            .put_object()
            .bucket(location.bucket.as_str())
            .key(location.key.as_str())
            .body(body)
            .send()
            .await
            .map_err(|err| {
                let code = err.as_service_error().and_then(|e| e.code()).map(str::to_string);
                classify_put_error(
                    code.as_deref(),
                    DisplayErrorContext(&err).to_string(),
                    location,
                )
            })?;

        Ok(UploadReceipt {
            location: location.clone(),
            size_bytes,
            etag: output.e_tag().map(str::to_string),
        })
    }
}

/// Map an S3 error code onto the upload error taxonomy.
pub(crate) fn classify_put_error(
    code: Option<&str>,
    message: String,
    location: &CodeLocation,
) -> UploadError {
    match code {
        Some("NoSuchBucket") => UploadError::BucketNotFound(location.bucket.to_string()),
        Some(
            "AccessDenied" | "AllAccessDisabled" | "InvalidAccessKeyId" | "SignatureDoesNotMatch",
        ) => UploadError::PermissionDenied {
            bucket: location.bucket.to_string(),
            message,
        },
        _ => UploadError::Rejected(message),
    }
}
