//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use super::commands;
use doapetry::config::{Config, DEFAULT_BASE_URL, OutputTarget, STDOUT_MARKER};
use doapetry::output::RdfFormat;

/// doapetry - Describe a Python project as a DOAP graph
#[derive(Parser, Debug)]
#[command(
    name = "doapetry",
    version,
    about = "Describe a Python project as a DOAP graph",
    long_about = "Read the [project] table of pyproject.toml and emit an RDF description\n\
                  of the project using the DOAP vocabulary, with FOAF for people."
)]
pub struct Cli {
    /// Directory containing pyproject.toml
    #[arg(long, env = "DOAPETRY_PROJECT_PATH", default_value = ".")]
    pub project_path: PathBuf,

    /// Output file, or "-" for standard output
    #[arg(short, long, env = "DOAPETRY_OUTPUT", default_value = STDOUT_MARKER)]
    pub output: String,

    /// Prefix for the project IRI (the project name is appended)
    #[arg(long, env = "DOAPETRY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Serialization format: turtle, ntriples, rdfxml
    #[arg(short, long, env = "DOAPETRY_FORMAT", default_value = "turtle")]
    pub format: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into run settings
    pub fn into_config(self) -> anyhow::Result<Config> {
        let format: RdfFormat = self.format.parse().context("invalid --format")?;
        Ok(Config {
            project_path: self.project_path,
            output: OutputTarget::parse(&self.output),
            base_url: self.base_url,
            format,
        })
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    commands::describe(&cli.into_config()?)
}
