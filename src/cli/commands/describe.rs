//! Describe command: load, build, write

use log::error;

use doapetry::config::Config;
use doapetry::error::DescribeError;
use doapetry::output;

/// Describe the configured project and write the graph to the output target
///
/// A project that cannot be loaded is logged and produces no output, without
/// failing the process. Mapping and write errors are returned.
pub fn describe(config: &Config) -> anyhow::Result<()> {
    let graph = match doapetry::describe(&config.project_path, &config.base_url) {
        Ok(graph) => graph,
        Err(DescribeError::Load(e)) => {
            error!("{e}");
            return Ok(());
        },
        Err(e) => return Err(e.into()),
    };

    output::emit(&graph, &config.output, config.format)?;
    Ok(())
}
