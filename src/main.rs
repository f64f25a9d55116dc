//! tapseek binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use tapseek::cli::{Cli, Commands, ConfigCommands};
use tapseek::{logging, Config};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    logging::init(&logging::level_for_verbosity(
        &config.logging.level,
        cli.verbose,
    ))?;

    match cli.command {
        Commands::Replay { file, json } => commands::replay::handle(&file, json, &config),
        Commands::Play {
            duration,
            title,
            autoplay,
            record,
        } => commands::play::handle(duration, title, autoplay, record, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
