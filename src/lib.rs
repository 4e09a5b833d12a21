pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalFilesystem, MemoryFilesystem};
pub use config::CliConfig;
pub use core::scaffold::Scaffolder;
pub use domain::model::{Entry, ProjectName, ScaffoldReport};
pub use utils::error::{Result, ScaffoldError};

use std::path::Path;

/// Generates the project layout under `root`.
pub fn scaffold_in(root: impl AsRef<Path>, name: &ProjectName) -> Result<ScaffoldReport> {
    let root = root.as_ref();
    Scaffolder::new(LocalFilesystem::new(root), root).run(name)
}

/// Generates the project layout in the current working directory.
pub fn scaffold(name: &ProjectName) -> Result<ScaffoldReport> {
    scaffold_in(".", name)
}
