//! Typed project metadata (the `[project]` table)
//!
//! Deserialization goes through a permissive raw shape first; [`PyProject`] is
//! only produced after validation, so downstream code never re-checks fields.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::LoadError;

/// A parsed and validated `pyproject.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyProject {
    /// The `[project]` table
    pub project: ProjectMetadata,
}

/// Core project metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    /// Distribution name (never empty)
    pub name: String,
    /// One-line summary
    pub description: Option<String>,
    /// Original authors, in declaration order
    pub authors: Vec<Contact>,
    /// Current maintainers, in declaration order
    pub maintainers: Vec<Contact>,
    /// Labelled project URLs (`homepage`, `repository`, ...)
    pub urls: BTreeMap<String, String>,
    /// License declaration
    pub license: Option<License>,
    /// Readme declaration
    pub readme: Option<Readme>,
}

/// A person listed under `authors` or `maintainers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

/// The `readme` field: a path, or a table with `file` or inline `text`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Readme {
    /// `readme = "README.md"`
    Path(String),
    /// `readme = { file = "README.rst", content-type = "text/x-rst" }`
    File {
        /// Path relative to the project directory
        file: String,
        /// Declared media type
        #[serde(default, rename = "content-type")]
        content_type: Option<String>,
    },
    /// `readme = { text = "...", content-type = "text/markdown" }`
    Text {
        /// Inline readme body
        text: String,
        /// Declared media type
        #[serde(default, rename = "content-type")]
        content_type: Option<String>,
    },
}

impl Readme {
    /// The referenced file, if the readme lives on disk
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Path(file) | Self::File { file, .. } => Some(file),
            Self::Text { .. } => None,
        }
    }
}

/// The `license` field: an SPDX expression, inline text, or a license file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum License {
    /// `license = "MIT"`
    Expression(String),
    /// `license = { text = "MIT" }`
    Text {
        /// License identifier or text
        text: String,
    },
    /// `license = { file = "LICENSE" }`
    File {
        /// Path relative to the project directory
        file: String,
    },
}

impl License {
    /// License identifier text, when given inline
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Expression(text) | Self::Text { text } => Some(text),
            Self::File { .. } => None,
        }
    }

    /// The referenced license file, if any
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::File { file } => Some(file),
            _ => None,
        }
    }
}

/// Top-level document shape; other tables (`build-system`, `tool`) are ignored
#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    project: Option<RawProject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    authors: Vec<Contact>,
    #[serde(default)]
    maintainers: Vec<Contact>,
    #[serde(default)]
    urls: BTreeMap<String, String>,
    #[serde(default)]
    license: Option<License>,
    #[serde(default)]
    readme: Option<Readme>,
}

impl PyProject {
    /// Validate a raw document once, at the parser boundary
    pub(crate) fn from_raw(raw: RawDocument) -> Result<Self, LoadError> {
        let project = raw
            .project
            .ok_or_else(|| LoadError::Invalid("missing [project] table".to_string()))?;
        Ok(Self {
            project: ProjectMetadata::from_raw(project)?,
        })
    }
}

impl ProjectMetadata {
    fn from_raw(raw: RawProject) -> Result<Self, LoadError> {
        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(LoadError::Invalid("project.name is empty".to_string())),
            None => return Err(LoadError::Invalid("project.name is required".to_string())),
        };

        Ok(Self {
            name,
            description: raw.description,
            authors: raw.authors,
            maintainers: raw.maintainers,
            urls: raw.urls,
            license: raw.license,
            readme: raw.readme,
        })
    }

    /// Metadata with only a name set
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            authors: Vec::new(),
            maintainers: Vec::new(),
            urls: BTreeMap::new(),
            license: None,
            readme: None,
        }
    }

    /// Look up a project URL by its label, ignoring empty values
    #[must_use]
    pub fn url(&self, label: &str) -> Option<&str> {
        self.urls.get(label).map(String::as_str).filter(|url| !url.is_empty())
    }
}
