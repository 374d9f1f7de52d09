// ABOUTME: Capability traits for the cloud collaborators.
// ABOUTME: Defines ArtifactStore, FunctionUpdater, and CloudConnector.

mod connector;
mod function;
mod shared_types;
mod store;

pub use connector::{AuthError, CloudConnector};
pub use function::{FunctionUpdater, UpdateError};
pub use shared_types::*;
pub use store::{ArtifactStore, UploadError};
