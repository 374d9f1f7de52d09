// ABOUTME: Optional project file (lambda-deploy.yml) with build and target defaults.
// ABOUTME: Handles YAML parsing, discovery, and validation into domain types.

mod deserialize;

use crate::build::BuildPlan;
use crate::error::{Error, Result};
use crate::types::{ObjectKey, ProfileName};
use deserialize::{deserialize_build_plan, deserialize_object_key, deserialize_profile_name};
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "lambda-deploy.yml";
pub const CONFIG_FILENAME_ALT: &str = "lambda-deploy.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".lambda-deploy/config.yml";

const CONFIG_DIR: &str = ".lambda-deploy";

/// Project-level defaults. Every field is optional; command-line flags win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default, deserialize_with = "deserialize_build_plan")]
    pub build: Option<BuildPlan>,

    #[serde(default)]
    pub artifact: Option<PathBuf>,

    #[serde(default, deserialize_with = "deserialize_object_key")]
    pub key: Option<ObjectKey>,

    #[serde(default, deserialize_with = "deserialize_profile_name")]
    pub profile: Option<ProfileName>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub publish: bool,

    /// Project directory the file belongs to. Set by `load`, not read from YAML.
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

impl ProjectConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as unit; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.root = Some(project_root(path));
        tracing::debug!(path = %path.display(), root = ?config.root, "loaded project config");
        Ok(config)
    }

    /// Look for a project file in `dir`. Absence is not an error.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Load an explicit path (relative to `dir`) if given, otherwise discover in `dir`.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::load(&dir.join(path)).map(Some),
            None => Self::discover(dir),
        }
    }
}

/// Directory a project file belongs to: its parent, or the parent of `.lambda-deploy/`.
fn project_root(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new(""));
    match parent.file_name() {
        Some(name) if name == OsStr::new(CONFIG_DIR) => {
            parent.parent().unwrap_or(Path::new("")).to_path_buf()
        }
        _ => parent.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = ProjectConfig::from_yaml("\n").unwrap();
        assert!(config.build.is_none());
        assert!(config.artifact.is_none());
        assert!(!config.publish);
    }

    #[test]
    fn root_of_nested_file_is_project_dir() {
        assert_eq!(
            project_root(Path::new("/srv/app/.lambda-deploy/config.yml")),
            Path::new("/srv/app")
        );
        assert_eq!(
            project_root(Path::new("/srv/app/lambda-deploy.yml")),
            Path::new("/srv/app")
        );
    }

    #[test]
    fn discover_without_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ProjectConfig::discover(dir.path()).unwrap().is_none());
    }
}
