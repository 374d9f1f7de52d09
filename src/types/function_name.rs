// ABOUTME: Lambda function identifier validation.
// ABOUTME: Accepts plain names, partial ARNs, and full function ARNs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FunctionNameError {
    #[error("function name cannot be empty")]
    Empty,

    #[error("function name exceeds maximum length of {max} characters")]
    TooLong { max: usize },

    #[error("invalid character in function name: '{0}'")]
    InvalidChar(char),

    #[error("malformed function ARN: {0}")]
    MalformedArn(String),
}

const MAX_NAME_LEN: usize = 64;
const MAX_ARN_LEN: usize = 140;

/// A function name, partial ARN (`123456789012:function:name`) or full ARN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName(String);

impl FunctionName {
    pub fn new(value: &str) -> Result<Self, FunctionNameError> {
        if value.is_empty() {
            return Err(FunctionNameError::Empty);
        }

        if value.starts_with("arn:") {
            validate_arn(value)?;
        } else if value.contains(':') {
            if value.len() > MAX_ARN_LEN {
                return Err(FunctionNameError::TooLong { max: MAX_ARN_LEN });
            }
            for segment in value.split(':') {
                validate_segment(segment)?;
            }
        } else {
            if value.len() > MAX_NAME_LEN {
                return Err(FunctionNameError::TooLong { max: MAX_NAME_LEN });
            }
            validate_segment(value)?;
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is a full ARN rather than a bare name.
    pub fn is_arn(&self) -> bool {
        self.0.starts_with("arn:")
    }
}

fn validate_segment(segment: &str) -> Result<(), FunctionNameError> {
    if segment.is_empty() {
        return Err(FunctionNameError::Empty);
    }
    for c in segment.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '$' {
            return Err(FunctionNameError::InvalidChar(c));
        }
    }
    Ok(())
}

// arn:<partition>:lambda:<region>:<account>:function:<name>[:<qualifier>]
fn validate_arn(value: &str) -> Result<(), FunctionNameError> {
    if value.len() > MAX_ARN_LEN {
        return Err(FunctionNameError::TooLong { max: MAX_ARN_LEN });
    }

    let parts: Vec<&str> = value.split(':').collect();
    if !(7..=8).contains(&parts.len()) {
        return Err(FunctionNameError::MalformedArn(value.to_string()));
    }
    if parts[2] != "lambda" || parts[5] != "function" {
        return Err(FunctionNameError::MalformedArn(value.to_string()));
    }
    if parts[4].len() != 12 || !parts[4].chars().all(|c| c.is_ascii_digit()) {
        return Err(FunctionNameError::MalformedArn(value.to_string()));
    }

    parts[6..].iter().try_for_each(|segment| validate_segment(segment))
}

impl FromStr for FunctionName {
    type Err = FunctionNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
