// ABOUTME: Function hosting trait for repointing code at an uploaded object.

use async_trait::async_trait;

use super::shared_types::{CodeLocation, FunctionCodeUpdate};
use crate::types::FunctionName;

/// Serverless function code updates.
#[async_trait]
pub trait FunctionUpdater: Send + Sync {
    /// Point `function` at the object stored at `source`.
    async fn update_code(
        &self,
        function: &FunctionName,
        source: &CodeLocation,
        publish: bool,
    ) -> Result<FunctionCodeUpdate, UpdateError>;
}

/// Errors from the function update step.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    #[error("permission denied updating function {function}: {message}")]
    PermissionDenied { function: String, message: String },

    #[error("function update rejected: {0}")]
    Rejected(String),
}
