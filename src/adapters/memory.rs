use crate::domain::ports::Filesystem;
use crate::utils::error::{Result, ScaffoldError};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir,
    File(String),
}

/// In-memory filesystem with the same creation rules as `LocalFilesystem`.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Node> {
        self.nodes.borrow().get(path.as_ref()).cloned()
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.get(path)? {
            Node::File(contents) => Some(contents),
            Node::Dir => None,
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.nodes.borrow().keys().cloned().collect()
    }

    fn insert(&self, path: &Path, node: Node) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();

        if nodes.contains_key(path) {
            return Err(ScaffoldError::from_io(
                path,
                io::Error::from(io::ErrorKind::AlreadyExists),
            ));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if nodes.get(parent) != Some(&Node::Dir) {
                return Err(ScaffoldError::from_io(
                    path,
                    io::Error::from(io::ErrorKind::NotFound),
                ));
            }
        }

        nodes.insert(path.to_path_buf(), node);
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> Result<()> {
        self.insert(path, Node::Dir)
    }

    fn create_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.insert(path, Node::File(contents.to_string()))
    }
}
