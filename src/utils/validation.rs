use crate::utils::error::{Result, ScaffoldError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(name: &str, reason: &str) -> ScaffoldError {
    ScaffoldError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Only the empty string is rejected; whitespace is part of the name.
pub fn validate_non_empty_string(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "Name cannot be empty"));
    }
    Ok(())
}

/// Rejects names that cannot be used as a single path segment.
pub fn validate_path_segment(name: &str) -> Result<()> {
    if name.contains('\0') {
        return Err(invalid(name, "Name contains null bytes"));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(invalid(name, "Name cannot contain path separators"));
    }

    if name == "." || name == ".." {
        return Err(invalid(name, "Name cannot be a relative directory reference"));
    }

    Ok(())
}
