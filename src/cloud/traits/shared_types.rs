// ABOUTME: Shared types passed between the deployment pipeline and cloud traits.

use serde::Serialize;
use std::fmt;

use crate::types::{BucketName, ObjectKey, ProfileName};

/// Inputs used to open a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Named profile; `None` means the default credential chain.
    pub profile: Option<ProfileName>,
    pub region: Option<String>,
}

/// Bucket and key of an uploaded artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CodeLocation {
    #[serde(serialize_with = "serialize_display")]
    pub bucket: BucketName,
    #[serde(serialize_with = "serialize_display")]
    pub key: ObjectKey,
}

impl CodeLocation {
    pub fn new(bucket: BucketName, key: ObjectKey) -> Self {
        Self { bucket, key }
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// What the store reported back for a completed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub location: CodeLocation,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// Function configuration returned after a code update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionCodeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_status: Option<String>,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_location_displays_as_s3_uri() {
        let location = CodeLocation::new(
            BucketName::new("my-bucket").unwrap(),
            ObjectKey::new("LambdaScala-assembly-1.0.jar").unwrap(),
        );
        assert_eq!(
            location.to_string(),
            "s3://my-bucket/LambdaScala-assembly-1.0.jar"
        );
    }

    #[test]
    fn code_location_serializes_as_strings() {
        let location = CodeLocation::new(
            BucketName::new("my-bucket").unwrap(),
            ObjectKey::new("app.jar").unwrap(),
        );
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["bucket"], "my-bucket");
        assert_eq!(json["key"], "app.jar");
    }
}
