// ABOUTME: Custom serde deserializers for project config fields.
// ABOUTME: Handles build command lists, object keys, and profile names.

use nonempty::NonEmpty;
use serde::Deserialize;

use crate::build::{BuildPlan, CommandEntry};
use crate::types::{ObjectKey, ProfileName};

pub fn deserialize_build_plan<'de, D>(deserializer: D) -> Result<Option<BuildPlan>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<Vec<CommandEntry>> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(entries) => {
            let commands = entries
                .into_iter()
                .map(CommandEntry::into_command)
                .collect::<Result<Vec<_>, _>>()
                .map_err(serde::de::Error::custom)?;

            let steps = NonEmpty::from_vec(commands).ok_or_else(|| {
                serde::de::Error::custom(
                    "at least one build command is required (use --skip-build to skip the build)",
                )
            })?;
            Ok(Some(BuildPlan::new(steps)))
        }
    }
}

pub fn deserialize_object_key<'de, D>(deserializer: D) -> Result<Option<ObjectKey>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| ObjectKey::new(&s).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_profile_name<'de, D>(deserializer: D) -> Result<Option<ProfileName>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| ProfileName::new(&s).map_err(serde::de::Error::custom))
        .transpose()
}
