//! Graph serialization
//!
//! Writes a DOAP graph in one of the RDF text formats supported by `oxrdfio`,
//! and parses such text back into a graph.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use log::debug;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat as OxRdfFormat, RdfParser, RdfSerializer};

use crate::config::OutputTarget;
use crate::doap::vocab::PREFIXES;
use crate::error::OutputError;

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle (default), statements grouped by subject
    #[default]
    Turtle,
    /// N-Triples, one statement per line
    NTriples,
    /// RDF/XML
    RdfXml,
}

impl RdfFormat {
    const fn to_oxrdfio(self) -> OxRdfFormat {
        match self {
            Self::Turtle => OxRdfFormat::Turtle,
            Self::NTriples => OxRdfFormat::NTriples,
            Self::RdfXml => OxRdfFormat::RdfXml,
        }
    }

    /// Conventional file extension
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
            Self::RdfXml => "rdf",
        }
    }
}

impl FromStr for RdfFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Self::NTriples),
            "rdfxml" | "rdf/xml" | "xml" | "rdf" => Ok(Self::RdfXml),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Turtle => "turtle",
            Self::NTriples => "ntriples",
            Self::RdfXml => "rdfxml",
        })
    }
}

/// Serialize `graph` into `writer`, returning the writer once finished
///
/// # Errors
///
/// Returns [`OutputError::Io`] if writing fails.
pub fn write_graph<W: Write>(
    graph: &Graph,
    writer: W,
    format: RdfFormat,
) -> Result<W, OutputError> {
    let mut serializer = RdfSerializer::from_format(format.to_oxrdfio());
    for &(name, iri) in PREFIXES {
        serializer = serializer
            .with_prefix(name, iri)
            .map_err(|e| OutputError::InvalidPrefix {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
    }

    let mut serializer = serializer.for_writer(writer);
    for triple in graph {
        serializer.serialize_triple(triple)?;
    }
    Ok(serializer.finish()?)
}

/// Serialize `graph` into a string
///
/// # Errors
///
/// Returns an error if serialization fails or produces invalid UTF-8.
pub fn graph_to_string(graph: &Graph, format: RdfFormat) -> Result<String, OutputError> {
    let buffer = write_graph(graph, Vec::new(), format)?;
    Ok(String::from_utf8(buffer)?)
}

/// Parse serialized text back into a graph
///
/// # Errors
///
/// Returns [`OutputError::Parse`] if the text is not valid in `format`.
pub fn parse_graph(input: &str, format: RdfFormat) -> Result<Graph, OutputError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format.to_oxrdfio()).for_reader(input.as_bytes()) {
        let quad = quad.map_err(|e| OutputError::Parse(e.to_string()))?;
        graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
    }
    Ok(graph)
}

/// Write `graph` to `target`
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the target cannot be created or written.
pub fn emit(graph: &Graph, target: &OutputTarget, format: RdfFormat) -> Result<(), OutputError> {
    debug!("Write {} statement(s) as {format} to {target}", graph.len());
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_graph(graph, &mut lock, format)?.flush()?;
        },
        OutputTarget::File(path) => {
            let file = File::create(path)?;
            write_graph(graph, BufWriter::new(file), format)?.flush()?;
        },
    }
    Ok(())
}
