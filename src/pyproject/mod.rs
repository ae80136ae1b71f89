//! `pyproject.toml` metadata
//!
//! - [`model`] - Typed, validated project metadata
//! - [`parser`] - Read and validate `pyproject.toml` from a project directory
//! - [`loader`] - Retry driver and companion-file workaround around the parser

pub mod loader;
pub mod model;
pub mod parser;

pub use loader::{CompanionGuard, LoadedProject, MAX_ATTEMPTS, SENTINEL, load};
pub use model::{Contact, License, ProjectMetadata, PyProject, Readme};
pub use parser::{ParseOutcome, parse, parse_str};

/// Metadata filename inside a project directory
pub const PYPROJECT_TOML: &str = "pyproject.toml";

/// Readme reference whose absence the loader knows how to work around
pub const COMPANION_FILE_NAME: &str = "README.md";
