//! Load a project and describe it
//!
//! Two phases: [`load`](crate::pyproject::load) the metadata, then
//! [`build`](crate::doap::build) the graph. The companion readme is cleaned up
//! after the graph is built, whether or not building succeeded.

use std::path::Path;

use log::{info, warn};
use oxrdf::Graph;

use crate::doap;
use crate::error::DescribeError;
use crate::pyproject;

/// Build the DOAP graph for the project in `project_path`
///
/// # Errors
///
/// Returns [`DescribeError::Load`] if the metadata could not be loaded, and
/// [`DescribeError::Graph`] if it could not be mapped.
pub fn describe(project_path: &Path, base_url: &str) -> Result<Graph, DescribeError> {
    let loaded = pyproject::load(project_path)?;
    let graph = doap::build(&loaded.pyproject.project, base_url);

    if let Err(e) = loaded.finish() {
        warn!("Could not clean up the companion readme: {e}");
    }

    let graph = graph?;
    info!(
        "Described {} with {} statement(s)",
        project_path.display(),
        graph.len()
    );
    Ok(graph)
}
