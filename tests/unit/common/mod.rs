//! Shared test fixtures and helpers

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use oxrdf::{Graph, NamedNode, NamedNodeRef, Term, Triple};
use tempfile::TempDir;

/// Base URL used throughout the tests
pub const BASE: &str = "https://example.org/";

/// A throwaway project directory
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a project directory with the given pyproject.toml
    pub fn with_pyproject(content: &str) -> Self {
        let project = Self::new();
        project.add_file("pyproject.toml", content);
        project
    }

    /// Get the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the project
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Add a file with content
    pub fn add_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file inside the project
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).unwrap()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// IRI helper
pub fn iri(text: &str) -> NamedNode {
    NamedNode::new(text).unwrap()
}

/// Whether `graph` holds the statement
pub fn has(
    graph: &Graph,
    subject: &NamedNode,
    predicate: NamedNodeRef<'_>,
    object: impl Into<Term>,
) -> bool {
    graph.contains(&Triple::new(subject.clone(), predicate, object))
}

/// Number of statements with this predicate and object
pub fn count(graph: &Graph, predicate: NamedNodeRef<'_>, object: &Term) -> usize {
    graph
        .iter()
        .filter(|t| t.predicate == predicate && t.object == object.as_ref())
        .count()
}

/// Number of statements with this subject and predicate
pub fn count_from(graph: &Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>) -> usize {
    graph
        .iter()
        .filter(|t| t.subject.to_string() == subject.to_string() && t.predicate == predicate)
        .count()
}

/// Statements as N-Triples lines, for order-independent comparison
pub fn statements(graph: &Graph) -> BTreeSet<String> {
    graph.iter().map(|t| t.to_string()).collect()
}
