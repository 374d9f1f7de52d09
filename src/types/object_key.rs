// ABOUTME: Object key under which the artifact is stored in the bucket.
// ABOUTME: Can be given explicitly or derived from the artifact's file name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectKeyError {
    #[error("object key cannot be empty")]
    Empty,

    #[error("object key exceeds maximum length of 1024 bytes")]
    TooLong,

    #[error("object key cannot start with '/'")]
    LeadingSlash,

    #[error("cannot derive an object key from path without a file name: {0}")]
    NoFileName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new(value: &str) -> Result<Self, ObjectKeyError> {
        if value.is_empty() {
            return Err(ObjectKeyError::Empty);
        }

        if value.len() > 1024 {
            return Err(ObjectKeyError::TooLong);
        }

        if value.starts_with('/') {
            return Err(ObjectKeyError::LeadingSlash);
        }

        Ok(Self(value.to_string()))
    }

    /// Derive a key from the base name of a local artifact path.
    pub fn from_file_name(path: &Path) -> Result<Self, ObjectKeyError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ObjectKeyError::NoFileName(path.display().to_string()))?;
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectKey {
    type Err = ObjectKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
