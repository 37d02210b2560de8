//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use routefind_core::config::Config;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// CLI flag or config default
    pub fn directed(&self, flag: bool) -> bool {
        flag || self.config.graph.directed
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routefind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Least-cost routes over weighted edge lists.");
        println!();
        println!("Run `routefind --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route { graph, from, to } => {
                crate::commands::route::execute(ctx, graph, *from, *to)
            }
            Commands::Neighbors { graph, node } => {
                crate::commands::neighbors::execute(ctx, graph, *node)
            }
            Commands::Cost { graph, nodes } => crate::commands::cost::execute(ctx, graph, nodes),
        }
    }
}
