use crate::domain::ports::Filesystem;
use crate::utils::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filesystem rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<()> {
        let full_path = self.root.join(path);
        tracing::debug!("Creating directory {}", full_path.display());

        fs::create_dir(&full_path).map_err(|e| ScaffoldError::from_io(path, e))
    }

    fn create_file(&self, path: &Path, contents: &str) -> Result<()> {
        let full_path = self.root.join(path);
        tracing::debug!("Creating file {}", full_path.display());

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .map_err(|e| ScaffoldError::from_io(path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| ScaffoldError::from_io(path, e))?;
        Ok(())
    }
}
