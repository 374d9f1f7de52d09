// ABOUTME: Lambda-backed function updater.
// ABOUTME: Issues UpdateFunctionCode pointing at the uploaded S3 object.

use async_trait::async_trait;
use aws_sdk_lambda::error::{DisplayErrorContext, ProvideErrorMetadata};

use crate::cloud::traits::{CodeLocation, FunctionCodeUpdate, FunctionUpdater, UpdateError};
use crate::types::FunctionName;

#[derive(Debug, Clone)]
pub struct LambdaFunctionUpdater {
    client: aws_sdk_lambda::Client,
}

impl LambdaFunctionUpdater {
    pub fn new(client: aws_sdk_lambda::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FunctionUpdater for LambdaFunctionUpdater {
    async fn update_code(
        &self,
        function: &FunctionName,
        source: &CodeLocation,
        publish: bool,
    ) -> Result<FunctionCodeUpdate, UpdateError> {
        tracing::info!(%function, %source, publish, "updating function code");

        let output = self
            .client
            .update_function_code()
            .function_name(function.as_str())
            .s3_bucket(source.bucket.as_str())
            .s3_key(source.key.as_str())
            .publish(publish)
            .send()
            .await
            .map_err(|err| {
                let code = err.as_service_error().and_then(|e| e.code()).map(str::to_string);
                classify_update_error(
                    code.as_deref(),
                    DisplayErrorContext(&err).to_string(),
                    function,
                )
            })?;

        Ok(FunctionCodeUpdate {
            function_arn: output.function_arn().map(str::to_string),
            code_sha256: output.code_sha256().map(str::to_string),
            version: output.version().map(str::to_string),
            last_update_status: output
                .last_update_status()
                .map(|status| status.as_str().to_string()),
        })
    }
}

/// Map a Lambda error code onto the update error taxonomy.
pub(crate) fn classify_update_error(
    code: Option<&str>,
    message: String,
    function: &FunctionName,
) -> UpdateError {
    match code {
        Some("ResourceNotFoundException") => UpdateError::FunctionNotFound(function.to_string()),
        Some("AccessDeniedException") => UpdateError::PermissionDenied {
            function: function.to_string(),
            message,
        },
        _ => UpdateError::Rejected(message),
    }
}
