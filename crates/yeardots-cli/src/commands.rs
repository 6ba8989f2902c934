use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.config, cli.now, cli.format)?;

    let Some(command) = cli.command else {
        return handlers::show::handle(&ctx, None, None);
    };

    match command {
        Commands::Show {
            granularity,
            remaining,
        } => handlers::show::handle(&ctx, granularity.map(Into::into), remaining.map(Into::into)),

        Commands::Cycle { steps, from } => {
            handlers::cycle::handle(&ctx, from.map(Into::into), steps)
        }

        Commands::Tui => handlers::tui::handle(&ctx),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
            ConfigCommand::Path => handlers::config::handle_path(&ctx),
        },
    }
}
