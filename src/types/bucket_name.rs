// ABOUTME: S3 bucket name validation.
// ABOUTME: Accepts the legacy character set Lambda still takes for S3Bucket.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BucketNameError {
    #[error("bucket name cannot be empty")]
    Empty,

    #[error("bucket name must be between 3 and 63 characters, got {0}")]
    InvalidLength(usize),

    #[error("bucket name must start and end with a letter or digit")]
    InvalidBoundary,

    #[error("invalid character in bucket name: '{0}'")]
    InvalidChar(char),

    #[error("bucket name cannot contain adjacent periods")]
    AdjacentPeriods,

    #[error("bucket name cannot be formatted as an IP address")]
    IpAddress,

    #[error("bucket name uses a reserved prefix or suffix")]
    Reserved,
}

const RESERVED_PREFIXES: &[&str] = &["xn--", "sthree-", "amzn-s3-demo-"];
const RESERVED_SUFFIXES: &[&str] = &["-s3alias", "--ol-s3", ".mrap", "--x-s3"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: &str) -> Result<Self, BucketNameError> {
        if value.is_empty() {
            return Err(BucketNameError::Empty);
        }

        if !(3..=63).contains(&value.len()) {
            return Err(BucketNameError::InvalidLength(value.len()));
        }

        if let Some(c) = value
            .chars()
            .find(|&c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '.' | '_'))
        {
            return Err(BucketNameError::InvalidChar(c));
        }

        let is_edge = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
        if !is_edge(value.chars().next()) || !is_edge(value.chars().last()) {
            return Err(BucketNameError::InvalidBoundary);
        }

        if value.contains("..") {
            return Err(BucketNameError::AdjacentPeriods);
        }

        if value.parse::<std::net::Ipv4Addr>().is_ok() {
            return Err(BucketNameError::IpAddress);
        }

        if RESERVED_PREFIXES.iter().any(|p| value.starts_with(p))
            || RESERVED_SUFFIXES.iter().any(|s| value.ends_with(s))
        {
            return Err(BucketNameError::Reserved);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase letters and underscores only exist on buckets created before
    /// the current naming rules; such buckets are not DNS compatible.
    pub fn is_legacy(&self) -> bool {
        self.0.chars().any(|c| c.is_ascii_uppercase() || c == '_')
    }
}

impl FromStr for BucketName {
    type Err = BucketNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
