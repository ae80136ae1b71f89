//! Project loader
//!
//! Drives [`parse`] with a bounded retry budget. When the only obstacle is a
//! missing `README.md`, the loader writes a placeholder with [`SENTINEL`]
//! content and tries again. The placeholder is tracked by a [`CompanionGuard`],
//! which removes it once the caller is done, or on any early return.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use super::PYPROJECT_TOML;
use super::model::{PyProject, Readme};
use super::parser::{ParseOutcome, parse};
use crate::error::LoadError;

/// Placeholder content written to a companion file the loader creates
pub const SENTINEL: &str = "__tmp__";

/// Total number of parse attempts
pub const MAX_ATTEMPTS: usize = 2;

/// Scoped handle on the companion readme
///
/// On [`release`](Self::release) or drop, the file is deleted if and only if its
/// content is exactly [`SENTINEL`]. A readme with any other content is left alone,
/// whether or not the loader created it.
#[derive(Debug)]
pub struct CompanionGuard {
    path: PathBuf,
    released: bool,
}

impl CompanionGuard {
    /// Make sure `path` exists, writing [`SENTINEL`] into it if it does not
    pub fn ensure_present(path: PathBuf) -> io::Result<Self> {
        if !path.exists() {
            info!("Create {} with temporary content", path.display());
            fs::write(&path, SENTINEL)?;
        }
        Ok(Self::watch(path))
    }

    /// Track an existing file without creating it
    #[must_use]
    pub const fn watch(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    /// The tracked file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the cleanup now, returning whether the file was removed
    pub fn release(mut self) -> io::Result<bool> {
        self.released = true;
        remove_if_sentinel(&self.path)
    }
}

impl Drop for CompanionGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = remove_if_sentinel(&self.path) {
            warn!("Could not clean up {}: {e}", self.path.display());
        }
    }
}

fn remove_if_sentinel(path: &Path) -> io::Result<bool> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if content != SENTINEL.as_bytes() {
        return Ok(false);
    }
    info!("Remove temporarily created {}", path.display());
    fs::remove_file(path)?;
    Ok(true)
}

/// A successfully loaded project and the readme cleanup still pending
#[derive(Debug)]
pub struct LoadedProject {
    /// The validated metadata
    pub pyproject: PyProject,
    companion: Option<CompanionGuard>,
}

impl LoadedProject {
    /// The readme checked for sentinel content on cleanup, if any
    #[must_use]
    pub fn companion(&self) -> Option<&Path> {
        self.companion.as_ref().map(CompanionGuard::path)
    }

    /// Clean up the companion readme, returning whether it was removed
    pub fn finish(self) -> io::Result<bool> {
        self.companion.map_or(Ok(false), CompanionGuard::release)
    }
}

/// Load `<project_dir>/pyproject.toml`
///
/// # Errors
///
/// Returns [`LoadError::Exhausted`] when every attempt ended on a missing file,
/// or the parser's error for anything else (bad TOML, schema violations, IO).
pub fn load(project_dir: &Path) -> Result<LoadedProject, LoadError> {
    let metadata_path = project_dir.join(PYPROJECT_TOML);
    let mut companion: Option<CompanionGuard> = None;
    let mut missing = metadata_path.clone();

    for attempt in 1..=MAX_ATTEMPTS {
        info!(
            "Load project from {} (attempt {attempt}/{MAX_ATTEMPTS})",
            metadata_path.display()
        );
        match parse(project_dir) {
            ParseOutcome::Success(pyproject) => {
                let companion = companion.or_else(|| declared_readme(project_dir, &pyproject));
                return Ok(LoadedProject {
                    pyproject,
                    companion,
                });
            },
            ParseOutcome::MissingCompanion(path) => {
                info!("File {} was not found", path.display());
                companion = Some(CompanionGuard::ensure_present(path.clone())?);
                missing = path;
            },
            ParseOutcome::OtherError(LoadError::MissingFile(path)) => {
                info!("File {} was not found", path.display());
                missing = path;
            },
            ParseOutcome::OtherError(e) => return Err(e),
        }
    }

    error!("Could not load the project.");
    debug!("Last missing file: {}", missing.display());
    Err(LoadError::Exhausted {
        attempts: MAX_ATTEMPTS,
        missing,
    })
}

fn declared_readme(project_dir: &Path, pyproject: &PyProject) -> Option<CompanionGuard> {
    pyproject
        .project
        .readme
        .as_ref()
        .and_then(Readme::file)
        .map(|file| CompanionGuard::watch(project_dir.join(file)))
}
