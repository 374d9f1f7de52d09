// ABOUTME: Session establishment with the cloud provider.
// ABOUTME: Resolves credentials for an optional named profile.

use async_trait::async_trait;

use super::function::FunctionUpdater;
use super::shared_types::SessionSettings;
use super::store::ArtifactStore;

/// Opens an authenticated session that can upload and update functions.
#[async_trait]
pub trait CloudConnector: Send + Sync {
    type Session: ArtifactStore + FunctionUpdater;

    /// Resolve credentials and build clients.
    async fn connect(&self, settings: &SessionSettings) -> Result<Self::Session, AuthError>;
}

/// Credential or session resolution failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("no credentials provider is configured{}", profile_suffix(.profile))]
    NoProvider { profile: Option<String> },

    #[error("failed to resolve credentials{}: {message}", profile_suffix(.profile))]
    Credentials {
        profile: Option<String>,
        message: String,
    },

    #[error("no region configured{}; pass --region or set one in the profile", profile_suffix(.profile))]
    NoRegion { profile: Option<String> },
}

fn profile_suffix(profile: &Option<String>) -> String {
    match profile {
        Some(name) => format!(" for profile '{name}'"),
        None => String::new(),
    }
}
