// ABOUTME: AWS implementation of the cloud traits.
// ABOUTME: S3 for artifact storage, Lambda for function code updates.

mod lambda;
mod s3;
mod session;

pub use lambda::LambdaFunctionUpdater;
pub use s3::S3ArtifactStore;
pub use session::{AwsConnector, AwsSession};
