// ABOUTME: Resolved deployment inputs.
// ABOUTME: Merges command-line values, project file values, and built-in defaults.

use std::path::{Path, PathBuf};

use crate::build::BuildPlan;
use crate::cloud::{CodeLocation, SessionSettings};
use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::types::{BucketName, FunctionName, ObjectKey, ProfileName};

/// Artifact path used when neither the command line nor the project file sets one.
pub const DEFAULT_ARTIFACT_PATH: &str = "target/scala-2.12/LambdaScala-assembly-1.0.jar";

/// Object key produced by the default artifact path.
pub const DEFAULT_ARTIFACT_KEY: &str = "LambdaScala-assembly-1.0.jar";

/// Values taken from the command line.
#[derive(Debug, Clone)]
pub struct DeployArgs {
    pub bucket: BucketName,
    pub function: FunctionName,
    pub file_location: Option<PathBuf>,
    pub key: Option<ObjectKey>,
    pub profile: Option<ProfileName>,
    pub region: Option<String>,
    pub publish: bool,
    pub skip_build: bool,
}

impl DeployArgs {
    pub fn new(bucket: BucketName, function: FunctionName) -> Self {
        Self {
            bucket,
            function,
            file_location: None,
            key: None,
            profile: None,
            region: None,
            publish: false,
            skip_build: false,
        }
    }
}

/// Whether to run the build commands before uploading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStage {
    Run(BuildPlan),
    Skip,
}

/// Fully resolved inputs for one deployment.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub bucket: BucketName,
    pub function: FunctionName,
    /// Artifact path as given; relative paths are resolved against `project_dir`.
    pub artifact: PathBuf,
    pub key: ObjectKey,
    pub session: SessionSettings,
    pub publish: bool,
    pub build: BuildStage,
    pub project_dir: PathBuf,
}

impl DeployRequest {
    /// Resolve with precedence: command line, then project file, then defaults.
    ///
    /// The object key defaults to the artifact's file name.
    pub fn resolve(
        args: DeployArgs,
        config: Option<&ProjectConfig>,
        project_dir: &Path,
    ) -> Result<Self> {
        let defaults = ProjectConfig::default();
        let config = config.unwrap_or(&defaults);

        let artifact = args
            .file_location
            .or_else(|| config.artifact.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH));

        let key = match args.key.or_else(|| config.key.clone()) {
            Some(key) => key,
            None => ObjectKey::from_file_name(&artifact).map_err(|e| Error::Usage(e.to_string()))?,
        };

        let region = match args.region.or_else(|| config.region.clone()) {
            Some(region) if region.trim().is_empty() => {
                return Err(Error::Usage("region cannot be blank".to_string()));
            }
            other => other,
        };

        let build = if args.skip_build {
            BuildStage::Skip
        } else {
            BuildStage::Run(config.build.clone().unwrap_or_default())
        };

        Ok(Self {
            bucket: args.bucket,
            function: args.function,
            artifact,
            key,
            session: SessionSettings {
                profile: args.profile.or_else(|| config.profile.clone()),
                region,
            },
            publish: args.publish || config.publish,
            build,
            project_dir: project_dir.to_path_buf(),
        })
    }

    /// Artifact path resolved against the project directory.
    pub fn artifact_path(&self) -> PathBuf {
        self.project_dir.join(&self.artifact)
    }

    pub fn code_location(&self) -> CodeLocation {
        CodeLocation::new(self.bucket.clone(), self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> DeployArgs {
        DeployArgs::new(
            BucketName::new("my-bucket").unwrap(),
            FunctionName::new("my-fn").unwrap(),
        )
    }

    #[test]
    fn default_artifact_yields_fixed_key() {
        let request = DeployRequest::resolve(args(), None, Path::new("/work")).unwrap();
        assert_eq!(request.artifact, PathBuf::from(DEFAULT_ARTIFACT_PATH));
        assert_eq!(request.key.as_str(), DEFAULT_ARTIFACT_KEY);
        assert_eq!(
            request.artifact_path(),
            Path::new("/work").join(DEFAULT_ARTIFACT_PATH)
        );
    }

    #[test]
    fn path_without_file_name_is_usage_error() {
        let mut a = args();
        a.file_location = Some(PathBuf::from(".."));
        let err = DeployRequest::resolve(a, None, Path::new("/work")).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn skip_build_ignores_configured_plan() {
        let mut a = args();
        a.skip_build = true;
        let request = DeployRequest::resolve(a, None, Path::new("/work")).unwrap();
        assert_eq!(request.build, BuildStage::Skip);
    }
}
