use crate::domain::model::Entry;
use crate::utils::error::Result;
use std::path::Path;

/// Creation-only view of the output root. Neither operation may replace
/// something that is already there.
pub trait Filesystem {
    /// Creates a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Creates a new file with `contents`. Fails if the file exists.
    fn create_file(&self, path: &Path, contents: &str) -> Result<()>;

    fn create_entry(&self, entry: &Entry) -> Result<()> {
        match entry {
            Entry::Dir { path } => self.create_dir(path),
            Entry::File { path, contents } => self.create_file(path, contents),
        }
    }
}
