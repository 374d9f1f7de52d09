// ABOUTME: Runs the full build → session → upload → function-update pipeline.
// ABOUTME: Halts on the first failure; nothing is retried or rolled back.

use crate::cloud::CloudConnector;
use crate::diagnostics::Diagnostics;
use crate::output::Output;

use super::Deployment;
use super::error::DeployError;
use super::report::DeployReport;
use super::request::DeployRequest;

/// Deploy one artifact to one function.
pub async fn run_deployment<C>(
    request: DeployRequest,
    connector: &C,
    output: &Output,
) -> Result<DeployReport, DeployError>
where
    C: CloudConnector + ?Sized,
{
    let mut diag = Diagnostics::default();

    let deployment = Deployment::new(request).build(output).await?;

    output.progress("  → Opening cloud session...");
    let session = connector.connect(&deployment.request().session).await?;

    let deployment = deployment.upload(&session, output, &mut diag).await?;
    let deployment = deployment.update_function(&session, output).await?;

    Ok(deployment.finish(diag))
}
