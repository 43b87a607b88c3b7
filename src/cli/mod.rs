//! CLI Module
//!
//! Command-line front end that drives a single de-click session.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::ChannelType;

/// Declick session inspector
#[derive(Parser, Debug)]
#[command(name = "declick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file overriding the default threshold and max length
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the parameters used while no audio is loaded
    #[command(name = "defaults")]
    Defaults,

    /// Load an analysed fixture and list its patches
    #[command(name = "inspect")]
    Inspect {
        /// Path to the fixture JSON
        fixture: PathBuf,

        /// Channel to list (all channels in the fixture if omitted)
        #[arg(long)]
        channel: Option<ChannelType>,

        /// Detection threshold to apply after loading
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Max correction length to apply after loading
        #[arg(short, long)]
        max_length: Option<i32>,
    },
}
