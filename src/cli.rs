use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Editorial CLI for the portal content dataset
#[derive(Parser)]
#[command(name = "helhub")]
#[command(about = "Inspect, validate and compose the portal content dataset", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a dataset file and report whether it passes validation
    Check {
        /// Dataset file (.js script form or plain JSON); defaults to the
        /// working copy in the user data directory
        file: Option<PathBuf>,
    },
    /// List cards with their ids and item counts
    Cards {
        file: PathBuf,
    },
    /// Show one card and its content items
    Show {
        file: PathBuf,
        /// Card id to look up
        id: String,
    },
    /// Print the flat feed of recent content
    Recent {
        file: PathBuf,
        /// Only the N most recent entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the announcement strings
    Announcements {
        file: PathBuf,
    },
    /// Build a fresh dataset revision from the site config and content log
    Compose {
        /// Site configuration (TOML)
        #[arg(short, long)]
        config: PathBuf,
        /// Content log (JSON list of feed entries)
        #[arg(long)]
        content: PathBuf,
        /// Output file; a .js extension emits the script form
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Load a dataset and re-emit it in the form the output extension picks
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
}
