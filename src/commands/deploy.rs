// ABOUTME: Deploy command implementation.
// ABOUTME: Resolves inputs, runs the pipeline against AWS, and reports the outcome.

use crate::cli::Cli;
use lambda_deploy::cloud::AwsConnector;
use lambda_deploy::config::ProjectConfig;
use lambda_deploy::deploy::{DeployRequest, run_deployment};
use lambda_deploy::error::Result;
use lambda_deploy::output::Output;
use std::env;

/// Build, upload, and update the function named on the command line.
pub async fn deploy(cli: &Cli, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = ProjectConfig::resolve(cli.config.as_deref(), &cwd)?;

    // File paths from the project file are relative to it; flags are relative to cwd.
    let project_dir = config
        .as_ref()
        .and_then(|c| c.root.clone())
        .unwrap_or_else(|| cwd.clone());
    let mut args = cli.deploy_args();
    args.file_location = args.file_location.map(|path| cwd.join(path));

    let request = DeployRequest::resolve(args, config.as_ref(), &project_dir)?;

    output.start_timer();
    output.progress(&format!(
        "Deploying {} to function {}",
        request.artifact.display(),
        request.function
    ));

    let report = run_deployment(request, &AwsConnector, output).await?;

    if let Some(ref sha) = report.update.code_sha256 {
        output.progress(&format!("  ✓ Code SHA-256: {sha}"));
    }

    for warning in &report.warnings {
        output.warning(&warning.message);
    }

    output.result(&report.summary(), &report);

    Ok(())
}
