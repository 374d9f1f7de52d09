// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Exports request resolution, state markers, and the pipeline runner.

mod deployment;
mod error;
mod pipeline;
mod report;
mod request;
mod state;
mod transitions;

pub use deployment::Deployment;
pub use error::{DeployError, DeployErrorKind};
pub use pipeline::run_deployment;
pub use report::DeployReport;
pub use request::{
    BuildStage, DEFAULT_ARTIFACT_KEY, DEFAULT_ARTIFACT_PATH, DeployArgs, DeployRequest,
};
pub use state::{Built, Completed, Initialized, Uploaded};
