// ABOUTME: A single external build command (program plus arguments).
// ABOUTME: Parses whitespace-separated strings or explicit argv lists.

use nonempty::NonEmpty;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Parse a whitespace-separated command line. No shell quoting is applied.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| "build command cannot be empty".to_string())?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Build from an argv list, first element being the program.
    pub fn from_argv(argv: Vec<String>) -> Result<Self, String> {
        let argv = NonEmpty::from_vec(argv)
            .ok_or_else(|| "build command argv cannot be empty".to_string())?;
        if argv.head.trim().is_empty() {
            return Err("build command program cannot be blank".to_string());
        }
        Ok(Self {
            program: argv.head,
            args: argv.tail,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Ordered, non-empty list of commands that produce the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    steps: NonEmpty<BuildCommand>,
}

impl BuildPlan {
    pub fn new(steps: NonEmpty<BuildCommand>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> impl Iterator<Item = &BuildCommand> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl Default for BuildPlan {
    /// `sbt compile` followed by `sbt assembly`.
    fn default() -> Self {
        Self {
            steps: NonEmpty {
                head: BuildCommand::new("sbt", &["compile"]),
                tail: vec![BuildCommand::new("sbt", &["assembly"])],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CommandEntry {
    Line(String),
    Argv(Vec<String>),
}

impl CommandEntry {
    pub(crate) fn into_command(self) -> Result<BuildCommand, String> {
        match self {
            CommandEntry::Line(line) => BuildCommand::parse(&line),
            CommandEntry::Argv(argv) => BuildCommand::from_argv(argv),
        }
    }
}
