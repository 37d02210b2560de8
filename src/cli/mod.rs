//! CLI argument parsing for routefind
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::GraphArgs;
use parse::{parse_format, parse_node_id};
use routefind_core::format::OutputFormat;
use routefind_core::graph::NodeId;

/// Routefind - least-cost routes over weighted edge lists
#[derive(Parser, Debug)]
#[command(name = "routefind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (default from config, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ~/.config/routefind/config.toml)
    #[arg(long, global = true, env = "ROUTEFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events (graph build, search outcome) to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the least-cost route described by an edge file
    Route {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node (overrides the file header)
        #[arg(long, value_parser = parse_node_id)]
        from: Option<NodeId>,

        /// Destination node (overrides the file header)
        #[arg(long, value_parser = parse_node_id)]
        to: Option<NodeId>,
    },

    /// List the direct neighbors of a node
    Neighbors {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node to inspect
        #[arg(value_parser = parse_node_id)]
        node: NodeId,
    },

    /// Total weight of walking an explicit node sequence
    Cost {
        #[command(flatten)]
        graph: GraphArgs,

        /// Nodes to visit, in order
        #[arg(id = "walk", value_name = "NODES", required = true, num_args = 1.., value_parser = parse_node_id)]
        nodes: Vec<NodeId>,
    },
}
