// ABOUTME: Named credential profile from the shared AWS config files.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileNameError {
    #[error("profile name cannot be empty")]
    Empty,

    #[error("profile name cannot contain whitespace")]
    ContainsWhitespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    pub fn new(value: &str) -> Result<Self, ProfileNameError> {
        if value.is_empty() {
            return Err(ProfileNameError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ProfileNameError::ContainsWhitespace);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProfileName {
    type Err = ProfileNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
