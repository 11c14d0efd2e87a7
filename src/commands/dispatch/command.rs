//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{calculate, grade, scale};
use oralgrade_core::command::COMMAND_NAME;
use oralgrade_core::config::GradingConfig;
use oralgrade_core::error::Result;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_config(&self) -> Result<GradingConfig> {
        let config = GradingConfig::load()?;
        trace_command!(self.cli, self.start, "load_config");
        Ok(config)
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
        println!("oralgrade {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("{} for oral exam protocols.", COMMAND_NAME);
        println!();
        println!("Run `oralgrade --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Calculate(args) => {
                let config = ctx.load_config()?;
                calculate::execute(ctx.cli, &config, args, ctx.start)
            }
            Commands::Grade { percent } => grade::execute(ctx.cli, percent),
            Commands::Scale => scale::execute(ctx.cli),
        }
    }
}
