use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ontofactory - resolve ontology handles and manage converted artifacts
#[derive(Parser, Debug)]
#[command(name = "ontofactory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the usual locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding converted artifacts
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Converter program used for non-canonical sources
    #[arg(long, global = true)]
    pub converter: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a handle (or the default ontology) and summarise it
    Load {
        /// Ontology handle; omit for the default ontology
        handle: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a handle would be resolved, without converting
    Classify {
        /// Ontology handle
        handle: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the conversion cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print the cache directory
    Path,

    /// List converted artifacts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
