//! rAttendance library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Some(command) = &cli.command else {
        return cli::commands::menu::handle(cfg);
    };

    match command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(command, cfg),
        Commands::List => cli::commands::list::handle(command, cfg),
        Commands::Mark { .. } => cli::commands::mark::handle(command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(command, cfg),
        Commands::Build { .. } => cli::commands::build::handle(command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line roster override
    if let Some(custom) = &cli.roster {
        cfg.students_file = custom.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
