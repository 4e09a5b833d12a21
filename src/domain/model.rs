use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path_segment, Validate};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Name of the generated package, used verbatim as a directory name and
/// inside every rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = Self(name.into());
        name.validate()?;
        Ok(name)
    }

    /// Builds a name from a line of interactive input, dropping only the
    /// line terminator.
    pub fn from_input_line(line: &str) -> Result<Self> {
        Self::new(line.trim_end_matches(['\n', '\r']))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for ProjectName {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(&self.0)?;
        validate_path_segment(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single output of a generation step, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dir { path: PathBuf },
    File { path: PathBuf, contents: String },
}

impl Entry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Entry::Dir { path: path.into() }
    }

    pub fn file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Entry::File {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// An empty package marker file.
    pub fn marker(path: impl Into<PathBuf>) -> Self {
        Self::file(path, String::new())
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::Dir { path } | Entry::File { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub root: PathBuf,
    pub created: Vec<PathBuf>,
}
