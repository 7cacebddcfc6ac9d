#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use settings::Settings;

mod chart;
mod cli;
mod commands;
mod log;
mod render;
mod request;
mod settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => settings::default_path()?,
    };
    let settings = Settings::load(&config_path)?;

    crate::log::init(crate::log::level(cli.verbose, settings.log_level))
        .context("failed to initialize logging")?;

    if !config_path.exists() {
        ::log::debug!("no configuration at {}, using defaults", config_path.display());
    }

    calisthenics_domain::catalog::check_integrity().context("corrupt exercise catalog")?;

    match cli.cmd {
        Commands::Generate(args) => commands::generate(args, &settings)?,
        Commands::Catalog(args) => commands::catalog(&args),
        Commands::Metabolism { request } => commands::metabolism(&request)?,
        Commands::Chart(args) => commands::chart(&args, &settings)?,
        Commands::Config(cmd) => commands::config(&cmd, &settings, &config_path)?,
    }

    Ok(())
}
