// ABOUTME: Test support utilities shared by integration tests.
// ABOUTME: In-memory cloud fake that records every session, upload, and update call.

#![allow(dead_code)]

use async_trait::async_trait;
use lambda_deploy::cloud::{
    ArtifactStore, AuthError, CloudConnector, CodeLocation, FunctionCodeUpdate, FunctionUpdater,
    SessionSettings, UpdateError, UploadError, UploadReceipt,
};
use lambda_deploy::types::FunctionName;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A call made against the fake cloud, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect {
        profile: Option<String>,
    },
    Upload {
        path: PathBuf,
        bucket: String,
        key: String,
    },
    UpdateCode {
        function: String,
        bucket: String,
        key: String,
        publish: bool,
    },
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    buckets: HashSet<String>,
    objects: HashMap<(String, String), Vec<u8>>,
    functions: HashMap<String, Option<CodeLocation>>,
    reject_credentials: bool,
}

/// In-memory stand-in for object storage and function hosting.
#[derive(Clone, Default)]
pub struct FakeCloud {
    state: Arc<Mutex<State>>,
}

impl FakeCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket(self, bucket: &str) -> Self {
        self.state.lock().buckets.insert(bucket.to_string());
        self
    }

    pub fn with_function(self, function: &str) -> Self {
        self.state
            .lock()
            .functions
            .insert(function.to_string(), None);
        self
    }

    pub fn rejecting_credentials(self) -> Self {
        self.state.lock().reject_credentials = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.state
            .lock()
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Where the function's code currently points.
    pub fn function_source(&self, function: &str) -> Option<CodeLocation> {
        self.state.lock().functions.get(function).cloned().flatten()
    }
}

#[async_trait]
impl CloudConnector for FakeCloud {
    type Session = FakeCloud;

    async fn connect(&self, settings: &SessionSettings) -> Result<FakeCloud, AuthError> {
        let profile = settings.profile.as_ref().map(|p| p.to_string());
        let mut state = self.state.lock();
        state.calls.push(Call::Connect {
            profile: profile.clone(),
        });
        if state.reject_credentials {
            return Err(AuthError::Credentials {
                profile,
                message: "the config profile could not be found".to_string(),
            });
        }
        Ok(self.clone())
    }
}

#[async_trait]
impl ArtifactStore for FakeCloud {
    async fn upload(
        &self,
        artifact: &Path,
        location: &CodeLocation,
    ) -> Result<UploadReceipt, UploadError> {
        let bytes = tokio::fs::read(artifact)
            .await
            .map_err(|e| UploadError::ReadFailed {
                path: artifact.display().to_string(),
                message: e.to_string(),
            })?;

        let mut state = self.state.lock();
        let bucket = location.bucket.to_string();
        let key = location.key.to_string();
        state.calls.push(Call::Upload {
            path: artifact.to_path_buf(),
            bucket: bucket.clone(),
            key: key.clone(),
        });

        if !state.buckets.contains(&bucket) {
            return Err(UploadError::BucketNotFound(bucket));
        }

        let size_bytes = bytes.len() as u64;
        state.objects.insert((bucket, key), bytes);
        Ok(UploadReceipt {
            location: location.clone(),
            size_bytes,
            etag: Some(format!("\"{size_bytes:x}\"")),
        })
    }
}

#[async_trait]
impl FunctionUpdater for FakeCloud {
    async fn update_code(
        &self,
        function: &FunctionName,
        source: &CodeLocation,
        publish: bool,
    ) -> Result<FunctionCodeUpdate, UpdateError> {
        let mut state = self.state.lock();
        state.calls.push(Call::UpdateCode {
            function: function.to_string(),
            bucket: source.bucket.to_string(),
            key: source.key.to_string(),
            publish,
        });

        let Some(current) = state.functions.get_mut(function.as_str()) else {
            return Err(UpdateError::FunctionNotFound(function.to_string()));
        };
        *current = Some(source.clone());

        Ok(FunctionCodeUpdate {
            function_arn: Some(format!(
                "arn:aws:lambda:us-east-1:123456789012:function:{function}"
            )),
            code_sha256: None,
            version: Some(if publish { "1" } else { "$LATEST" }.to_string()),
            last_update_status: Some("InProgress".to_string()),
        })
    }
}
