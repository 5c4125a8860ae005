//! Command implementations

pub(crate) mod build;
pub(crate) mod stats;

use std::path::Path;

use crate::error::{CliError, Result};

/// Reject paths that do not name a readable file, before handing them
/// to the library.
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
