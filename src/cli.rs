// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines deployment target flags, overrides, and output options.

use clap::Parser;
use lambda_deploy::deploy::DeployArgs;
use lambda_deploy::output::OutputMode;
use lambda_deploy::types::{BucketName, FunctionName, ObjectKey, ProfileName};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lambda-deploy")]
#[command(about = "Build an artifact, upload it to S3, and point a Lambda function at it")]
#[command(version)]
pub struct Cli {
    /// Target bucket for the artifact
    #[arg(short = 'b', long)]
    pub bucket_name: BucketName,

    /// Local artifact path [default: target/scala-2.12/LambdaScala-assembly-1.0.jar]
    #[arg(short = 'f', long)]
    pub file_location: Option<PathBuf>,

    /// Function name or ARN to update
    #[arg(short = 'n', long)]
    pub function_name: FunctionName,

    /// The AWS profile to use (default credential chain if omitted)
    #[arg(long)]
    pub profile: Option<ProfileName>,

    /// Object key for the artifact [default: artifact file name]
    #[arg(short = 'k', long)]
    pub key: Option<ObjectKey>,

    /// AWS region override
    #[arg(long)]
    pub region: Option<String>,

    /// Project file path; its paths and build commands resolve against its directory
    /// [default: lambda-deploy.yml in the current directory]
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Upload the existing artifact without running the build commands
    #[arg(long)]
    pub skip_build: bool,

    /// Publish a new function version after updating the code
    #[arg(long)]
    pub publish: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    pub fn deploy_args(&self) -> DeployArgs {
        DeployArgs {
            bucket: self.bucket_name.clone(),
            function: self.function_name.clone(),
            file_location: self.file_location.clone(),
            key: self.key.clone(),
            profile: self.profile.clone(),
            region: self.region.clone(),
            publish: self.publish,
            skip_build: self.skip_build,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["lambda-deploy", "-b", "my-bucket", "-n", "my-fn"]).unwrap();
        assert_eq!(cli.bucket_name.as_str(), "my-bucket");
        assert_eq!(cli.function_name.as_str(), "my-fn");
        assert!(cli.file_location.is_none());
        assert!(cli.profile.is_none());
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn missing_bucket_is_rejected() {
        let err = Cli::try_parse_from(["lambda-deploy", "-n", "my-fn"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_function_is_rejected() {
        let err =
            Cli::try_parse_from(["lambda-deploy", "--bucket-name", "my-bucket"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn invalid_bucket_name_is_rejected() {
        let err = Cli::try_parse_from(["lambda-deploy", "-b", "Bad_Bucket", "-n", "my-fn"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn quiet_and_json_conflict() {
        let err = Cli::try_parse_from([
            "lambda-deploy",
            "-b",
            "my-bucket",
            "-n",
            "my-fn",
            "--quiet",
            "--json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn profile_and_file_location_are_passed_through() {
        let cli = Cli::try_parse_from([
            "lambda-deploy",
            "-b",
            "my-bucket",
            "-n",
            "my-fn",
            "-f",
            "dist/app.zip",
            "--profile",
            "staging",
        ])
        .unwrap();
        let args = cli.deploy_args();
        assert_eq!(args.file_location, Some(PathBuf::from("dist/app.zip")));
        assert_eq!(args.profile.unwrap().as_str(), "staging");
    }
}
