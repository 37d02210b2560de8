//! Command dispatch logic for routefind

use std::time::Instant;

use crate::cli::Cli;
use routefind_core::config::Config;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), %format, "resolve_config");

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
