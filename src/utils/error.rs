use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Path already exists: {}", path.display())]
    PathCollision { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid project name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to read the project name: {0}")]
    Prompt(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Classifies an `io::Error` raised while creating `path`.
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::AlreadyExists => ScaffoldError::PathCollision { path },
            io::ErrorKind::PermissionDenied => ScaffoldError::PermissionDenied { path },
            _ => ScaffoldError::Io { path, source },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScaffoldError::PathCollision { .. } => {
                "Run the generator in an empty directory, or remove the files left by a previous run"
            }
            ScaffoldError::PermissionDenied { .. } => {
                "Check that you can write to the output directory"
            }
            ScaffoldError::Io { .. } => {
                "Remove any partially generated files and try again"
            }
            ScaffoldError::InvalidName { .. } => {
                "Use a plain package name such as `my_package`"
            }
            ScaffoldError::Prompt(_) => "Pass the name with --name instead",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidName { .. } | ScaffoldError::Prompt(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_error_kinds() {
        let err = ScaffoldError::from_io("demo", io::Error::from(io::ErrorKind::AlreadyExists));
        assert!(matches!(err, ScaffoldError::PathCollision { ref path } if path == Path::new("demo")));

        let err = ScaffoldError::from_io("demo", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ScaffoldError::PermissionDenied { .. }));

        let err = ScaffoldError::from_io("demo", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_input_exit_code() {
        let err = ScaffoldError::InvalidName {
            name: String::new(),
            reason: "empty".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid project name \"\": empty");
    }
}
