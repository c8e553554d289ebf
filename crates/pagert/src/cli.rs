//! Command-line interface definitions for pagert.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface arguments for the pagert binary.
#[derive(Parser, Debug)]
#[command(name = "pagert", about = "Page document runtime", version)]
pub struct Cli {
    /// Logging controls
    #[command(flatten)]
    pub log: LogArgs,

    /// Optional path to the runtime config file (defaults to ./pagert.ron when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Which subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate a page document, reporting semantic id collisions
    Check {
        /// Page document (JSON)
        page: PathBuf,
    },
    /// Print the component tree
    Tree {
        /// Page document (JSON)
        page: PathBuf,
    },
    /// Resolve a `{{...}}` template against the page
    Resolve {
        /// Page document (JSON)
        page: PathBuf,
        /// Template text, e.g. "Hello {{user.name}}"
        template: String,
    },
    /// Fetch a data source and print the cached result
    Fetch {
        /// Page document (JSON)
        page: PathBuf,
        /// Data source name or id
        source: String,
    },
    /// Run every event binding with a trigger on one component
    Fire {
        /// Page document (JSON)
        page: PathBuf,
        /// Component id or semantic id
        component: String,
        /// Trigger name, e.g. onClick
        trigger: String,
        /// Fetch autoFetch data sources before firing
        #[arg(long)]
        auto_fetch: bool,
    },
}
