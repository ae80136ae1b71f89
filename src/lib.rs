//! doapetry - Describe a Python project as a DOAP graph
//!
//! Reads the `[project]` table of `pyproject.toml` (name, description, authors,
//! maintainers, URLs, license) and emits an RDF description of the project using
//! the DOAP vocabulary, with FOAF for people.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod describe;
pub mod doap;
pub mod error;
pub mod output;
pub mod pyproject;

pub use describe::describe;
