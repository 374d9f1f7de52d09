// ABOUTME: Summary of a completed deployment.
// ABOUTME: Serializable for JSON output mode.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cloud::{CodeLocation, FunctionCodeUpdate, UploadReceipt};
use crate::diagnostics::{Diagnostics, Warning};
use crate::types::FunctionName;

#[derive(Debug, Clone, Serialize)]
pub struct DeployReport {
    pub function: String,
    pub location: CodeLocation,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    pub update: FunctionCodeUpdate,
    pub warnings: Vec<Warning>,
    pub deployed_at: DateTime<Utc>,
}

impl DeployReport {
    pub(crate) fn new(
        function: FunctionName,
        receipt: UploadReceipt,
        update: FunctionCodeUpdate,
        diag: Diagnostics,
    ) -> Self {
        Self {
            function: function.to_string(),
            location: receipt.location,
            size_bytes: receipt.size_bytes,
            etag: receipt.etag,
            update,
            warnings: diag.into_warnings(),
            deployed_at: Utc::now(),
        }
    }

    /// One-line summary for terminal output.
    pub fn summary(&self) -> String {
        let target = self
            .update
            .function_arn
            .as_deref()
            .unwrap_or(self.function.as_str());
        match self.update.version.as_deref() {
            Some(version) if version != "$LATEST" => {
                format!("Deployed {} to {target} (version {version})", self.location)
            }
            _ => format!("Deployed {} to {target}", self.location),
        }
    }
}
