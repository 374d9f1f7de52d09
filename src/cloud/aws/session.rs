// ABOUTME: Builds an authenticated AWS session from the default chain or a profile.
// ABOUTME: Credentials are resolved eagerly so auth failures surface before any upload.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Region;
use std::path::Path;

use super::lambda::LambdaFunctionUpdater;
use super::s3::S3ArtifactStore;
use crate::cloud::traits::{
    ArtifactStore, AuthError, CloudConnector, CodeLocation, FunctionCodeUpdate, FunctionUpdater,
    SessionSettings, UpdateError, UploadError, UploadReceipt,
};
use crate::types::FunctionName;

/// Connects using the AWS SDK's shared config and credential files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsConnector;

/// S3 and Lambda clients sharing one resolved configuration.
#[derive(Debug, Clone)]
pub struct AwsSession {
    store: S3ArtifactStore,
    functions: LambdaFunctionUpdater,
}

#[async_trait]
impl CloudConnector for AwsConnector {
    type Session = AwsSession;

    async fn connect(&self, settings: &SessionSettings) -> Result<AwsSession, AuthError> {
        let profile = settings.profile.as_ref().map(|p| p.to_string());

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref name) = profile {
            loader = loader.profile_name(name);
        }
        if let Some(ref region) = settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| AuthError::NoProvider {
                profile: profile.clone(),
            })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| AuthError::Credentials {
                profile: profile.clone(),
                message: e.to_string(),
            })?;

        match sdk_config.region() {
            Some(region) => tracing::debug!(%region, profile = ?profile, "resolved AWS session"),
            None => return Err(AuthError::NoRegion { profile }),
        }

        Ok(AwsSession {
            store: S3ArtifactStore::new(aws_sdk_s3::Client::new(&sdk_config)),
            functions: LambdaFunctionUpdater::new(aws_sdk_lambda::Client::new(&sdk_config)),
        })
    }
}

#[async_trait]
impl ArtifactStore for AwsSession {
    async fn upload(
        &self,
        artifact: &Path,
        location: &CodeLocation,
    ) -> Result<UploadReceipt, UploadError> {
        self.store.upload(artifact, location).await
    }
}

#[async_trait]
impl FunctionUpdater for AwsSession {
    async fn update_code(
        &self,
        function: &FunctionName,
        source: &CodeLocation,
        publish: bool,
    ) -> Result<FunctionCodeUpdate, UpdateError> {
        self.functions.update_code(function, source, publish).await
    }
}
