// ABOUTME: Non-fatal findings raised while a deployment runs.
// ABOUTME: Logged as they occur and handed to the final report with their kind.

use serde::Serialize;
use std::fmt;

/// Warnings gathered across the pipeline, in the order they were raised.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Warning>);

impl Diagnostics {
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = Warning {
            kind,
            message: message.into(),
        };
        tracing::warn!(kind = %warning.kind, "{}", warning.message);
        self.0.push(warning);
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Object key differs from the artifact's file name.
    KeyMismatch,
    /// Artifact file is zero bytes.
    EmptyArtifact,
    /// Bucket name predates the DNS-compatible naming rules.
    LegacyBucketName,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningKind::KeyMismatch => "key_mismatch",
            WarningKind::EmptyArtifact => "empty_artifact",
            WarningKind::LegacyBucketName => "legacy_bucket_name",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_keep_insertion_order() {
        let mut diag = Diagnostics::default();
        diag.warn(WarningKind::EmptyArtifact, "artifact is empty");
        diag.warn(WarningKind::KeyMismatch, "key differs");

        let kinds: Vec<_> = diag.into_warnings().into_iter().map(|w| w.kind).collect();
        assert_eq!(kinds, [WarningKind::EmptyArtifact, WarningKind::KeyMismatch]);
    }

    #[test]
    fn warning_serializes_kind_and_message() {
        let warning = Warning {
            kind: WarningKind::LegacyBucketName,
            message: "bucket My_Bucket is not DNS compatible".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&warning).unwrap(),
            serde_json::json!({
                "kind": "legacy_bucket_name",
                "message": "bucket My_Bucket is not DNS compatible",
            })
        );
    }
}
