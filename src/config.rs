//! Invocation settings
//!
//! A [`Config`] is assembled once by the CLI layer (flags, falling back to
//! `DOAPETRY_*` environment variables, falling back to the defaults below) and
//! then passed down read-only.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::output::RdfFormat;
use crate::pyproject::PYPROJECT_TOML;

/// Base for minting project IRIs when none is given
pub const DEFAULT_BASE_URL: &str = "https://example.org/";

/// Output argument meaning "write to standard output"
pub const STDOUT_MARKER: &str = "-";

/// Where the serialized graph goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret an output argument; `-` and `stdout` mean standard output
    #[must_use]
    pub fn parse(arg: &str) -> Self {
        match arg {
            STDOUT_MARKER | "stdout" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str(STDOUT_MARKER),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing `pyproject.toml`
    pub project_path: PathBuf,
    /// Output target
    pub output: OutputTarget,
    /// Prefix for the project IRI
    pub base_url: String,
    /// Serialization format
    pub format: RdfFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("."),
            output: OutputTarget::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            format: RdfFormat::default(),
        }
    }
}

impl Config {
    /// Path of the metadata file inside the project directory
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.project_path.join(PYPROJECT_TOML)
    }
}
