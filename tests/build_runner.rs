// ABOUTME: Integration tests for build command execution.
// ABOUTME: Exit status handling, ordering, and working directory of build steps.

use lambda_deploy::build::{BuildCommand, BuildError, BuildPlan, BuildRunner};
use lambda_deploy::output::{EventKind, Output, OutputMode};
use nonempty::NonEmpty;
use tempfile::TempDir;

fn sh(script: &str) -> BuildCommand {
    BuildCommand::new("sh", &["-c", script])
}

#[tokio::test]
async fn successful_command_returns_ok() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());
    assert!(runner.run_step(&sh("exit 0")).await.is_ok());
}

#[tokio::test]
async fn non_zero_exit_is_failure_with_code() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());

    let err = runner.run_step(&sh("exit 3")).await.unwrap_err();

    assert!(matches!(err, BuildError::Failed { code: 3, .. }));
    assert_eq!(err.exit_code(), Some(3));
    assert_eq!(err.command(), "sh -c exit 3");
}

#[tokio::test]
async fn missing_program_is_spawn_error() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());

    let err = runner
        .run_step(&BuildCommand::new("definitely-not-a-real-build-tool", &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, BuildError::Spawn { .. }));
    assert!(err.to_string().contains("failed to start"));
}

#[tokio::test]
async fn killed_command_is_terminated() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());

    let err = runner.run_step(&sh("kill -9 $$")).await.unwrap_err();

    assert!(matches!(err, BuildError::Terminated { .. }));
}

#[tokio::test]
async fn commands_run_in_project_dir() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());

    runner.run_step(&sh("touch marker")).await.unwrap();

    assert!(dir.path().join("marker").exists());
}

#[tokio::test]
async fn plan_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let runner = BuildRunner::new(dir.path());
    let plan = BuildPlan::new(NonEmpty {
        head: sh("touch first"),
        tail: vec![sh("exit 1"), sh("touch third")],
    });
    let (output, capture) = Output::captured(OutputMode::Normal);

    let err = runner.run_plan(&plan, &output).await.unwrap_err();

    assert!(matches!(err, BuildError::Failed { code: 1, .. }));
    assert!(dir.path().join("first").exists());
    assert!(!dir.path().join("third").exists());
    assert_eq!(capture.messages(EventKind::Progress).len(), 2);
}
