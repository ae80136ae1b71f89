//! DOAP description of a project
//!
//! - [`vocab`] - Namespace and term constants (DOAP, FOAF, SIOC, SPDX)
//! - [`builder`] - Map project metadata onto an RDF graph

pub mod builder;
pub mod vocab;

pub use builder::{build, project_iri};
