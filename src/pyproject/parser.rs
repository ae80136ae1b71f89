//! `pyproject.toml` parser
//!
//! Like the Python packaging tooling it stands in for, the parser only hands back
//! a record once every file the metadata points at (readme, license file) exists.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::model::{PyProject, RawDocument};
use super::{COMPANION_FILE_NAME, PYPROJECT_TOML};
use crate::error::LoadError;

/// Result of a single parse attempt
#[derive(Debug)]
pub enum ParseOutcome {
    /// The metadata parsed and every referenced file exists
    Success(PyProject),
    /// The companion readme is missing; creating it makes a retry worthwhile
    MissingCompanion(PathBuf),
    /// Any other failure, including other missing files
    OtherError(LoadError),
}

/// Parse and validate `pyproject.toml` content without touching the filesystem
///
/// # Errors
///
/// Returns [`LoadError::Toml`] for syntax or shape errors and
/// [`LoadError::Invalid`] when `[project]` or `project.name` is missing.
pub fn parse_str(content: &str) -> Result<PyProject, LoadError> {
    let raw: RawDocument = toml::from_str(content)?;
    PyProject::from_raw(raw)
}

/// Parse `<project_dir>/pyproject.toml`
#[must_use]
pub fn parse(project_dir: &Path) -> ParseOutcome {
    let metadata_path = project_dir.join(PYPROJECT_TOML);
    let content = match fs::read_to_string(&metadata_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ParseOutcome::OtherError(LoadError::MissingFile(metadata_path));
        },
        Err(e) => return ParseOutcome::OtherError(e.into()),
    };

    let pyproject = match parse_str(&content) {
        Ok(pyproject) => pyproject,
        Err(e) => return ParseOutcome::OtherError(e),
    };

    if let Some(file) = pyproject.project.readme.as_ref().and_then(|r| r.file()) {
        let path = project_dir.join(file);
        if !path.is_file() {
            // Only a reference literally named README.md is recoverable
            return if file == COMPANION_FILE_NAME {
                ParseOutcome::MissingCompanion(path)
            } else {
                ParseOutcome::OtherError(LoadError::MissingFile(path))
            };
        }
    }

    if let Some(file) = pyproject.project.license.as_ref().and_then(|l| l.file()) {
        let path = project_dir.join(file);
        if !path.is_file() {
            return ParseOutcome::OtherError(LoadError::MissingFile(path));
        }
    }

    ParseOutcome::Success(pyproject)
}
