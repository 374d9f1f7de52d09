// ABOUTME: Application-wide error types for lambda-deploy.
// ABOUTME: Maps every failure class onto a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::deploy::{DeployError, DeployErrorKind};

/// Successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Missing or invalid arguments, or an unusable project file.
pub const EXIT_USAGE: i32 = 1;
/// A compile or packaging command failed.
pub const EXIT_BUILD: i32 = 2;
/// Authentication, upload, or function update failed.
pub const EXIT_REMOTE: i32 = 3;

#[derive(Debug, Error)]
pub enum Error {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Deploy(#[from] DeployError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::ConfigNotFound(_) | Error::Io(_) | Error::Yaml(_) => {
                EXIT_USAGE
            }
            Error::Deploy(e) => match e.kind() {
                DeployErrorKind::Build => EXIT_BUILD,
                DeployErrorKind::Auth | DeployErrorKind::Upload | DeployErrorKind::Update => {
                    EXIT_REMOTE
                }
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildError;
    use crate::cloud::{AuthError, UpdateError, UploadError};

    #[test]
    fn usage_and_config_errors_exit_one() {
        assert_eq!(Error::Usage("missing".into()).exit_code(), EXIT_USAGE);
        assert_eq!(
            Error::ConfigNotFound(PathBuf::from("x.yml")).exit_code(),
            EXIT_USAGE
        );
    }

    #[test]
    fn build_failure_exits_two() {
        let err = Error::from(DeployError::from(BuildError::Failed {
            command: "sbt assembly".to_string(),
            code: 1,
        }));
        assert_eq!(err.exit_code(), EXIT_BUILD);
    }

    #[test]
    fn remote_failures_exit_three() {
        let auth = Error::from(DeployError::from(AuthError::NoProvider { profile: None }));
        let upload = Error::from(DeployError::from(UploadError::BucketNotFound(
            "b".to_string(),
        )));
        let update = Error::from(DeployError::from(UpdateError::FunctionNotFound(
            "f".to_string(),
        )));
        assert_eq!(auth.exit_code(), EXIT_REMOTE);
        assert_eq!(upload.exit_code(), EXIT_REMOTE);
        assert_eq!(update.exit_code(), EXIT_REMOTE);
    }
}
