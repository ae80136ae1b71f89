//! Error types for loading, mapping and writing project descriptions

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating and parsing `pyproject.toml`
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file needed to parse the metadata does not exist
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// IO error while reading or creating files
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The metadata file is not valid TOML or does not fit the expected shape
    #[error("invalid pyproject.toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// The metadata parsed but violates the project schema
    #[error("invalid project metadata: {0}")]
    Invalid(String),

    /// Every load attempt ended on a missing file
    #[error("could not load the project after {attempts} attempt(s): {} not found", .missing.display())]
    Exhausted {
        /// Number of attempts made
        attempts: usize,
        /// The file reported missing by the last attempt
        missing: PathBuf,
    },
}

/// Errors raised while mapping metadata onto the DOAP graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// A minted or copied IRI is not a valid IRI
    #[error("invalid IRI <{iri}>: {reason}")]
    InvalidIri {
        /// The offending IRI text
        iri: String,
        /// Why validation rejected it
        reason: String,
    },
}

/// Errors raised while serializing the graph
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error while writing the output target
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A prefix declaration was rejected by the serializer
    #[error("invalid prefix {name}: {reason}")]
    InvalidPrefix {
        /// Prefix name
        name: String,
        /// Why the serializer rejected it
        reason: String,
    },

    /// Serialized output was not valid UTF-8
    #[error("invalid UTF-8 in output: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The serialized text could not be parsed back
    #[error("parse error: {0}")]
    Parse(String),

    /// Unknown serialization format name
    #[error("unknown format: {0} (expected turtle, ntriples or rdfxml)")]
    UnknownFormat(String),
}

/// Errors raised while turning a project directory into a graph
#[derive(Debug, Error)]
pub enum DescribeError {
    /// The project could not be loaded; no graph was produced
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The metadata loaded but could not be mapped
    #[error(transparent)]
    Graph(#[from] GraphError),
}
